//! `zb8` - Zero-byte compression
//!
//! A lossless byte-stream codec optimized for payloads containing runs of
//! zero bytes, such as sparse buffers and delta- or XOR-preconditioned
//! numeric data. Zero runs collapse into one- or three-byte segments while
//! literal bytes are copied through, and a verbatim fallback caps the
//! worst case at a single 8-byte header of overhead.
//!
//! # Features
//! - **Bounded expansion**: output is never larger than `input + 8` bytes
//! - **High ratio on sparse data**: approaches ~22000:1 for all-zero input
//! - **Single pass**: word-at-a-time scan with branch-free zero detection
//! - **No unsafe**: the SIMD-within-a-register scan is plain `u64` math
//!
//! # Example
//! ```
//! let payload = [0u8; 4096];
//!
//! let mut frame = Vec::new();
//! zb8::compress(&payload, &mut frame);
//! assert!(frame.len() <= zb8::compress_bound(payload.len()));
//!
//! let mut restored = Vec::new();
//! zb8::decompress(&frame, &mut restored).unwrap();
//! assert_eq!(restored, payload);
//! ```
//!
//! # Frame Format
//!
//! ## Header (8 bytes, little-endian)
//! - bit 63: verbatim flag (body is the raw input)
//! - bits 0-62: uncompressed length N
//!
//! ## Body (compressed form)
//! A sequence of segments, each introduced by one control byte:
//!
//! | Control byte | Following bytes | Meaning |
//! |---|---|---|
//! | `0x00` | u16 LE length s | s zero bytes |
//! | `0x01`-`0x7F` (value v) | none | v zero bytes |
//! | `0x80` | u16 LE length s, then s bytes | s literal bytes |
//! | `0x81`-`0xFF` (low 7 bits n) | n bytes | n literal bytes |
//!
//! The encoder prefers short forms for runs of up to 127 and long forms
//! beyond that; the decoder accepts any well-formed segment sequence.
//!
//! ## Body (verbatim form)
//! Exactly N raw input bytes. Chosen whenever the compressed frame, header
//! included, would be larger than the input, so incompressible data pays
//! only the header.

#![allow(clippy::cast_possible_truncation)]

mod constants;
mod decoder;
mod encoder;
mod error;

#[cfg(test)]
mod tests;

pub use constants::{HEADER_SIZE, MAX_INPUT_SIZE, VERBATIM_FLAG};
pub use decoder::{decompress, decompressed_size};
pub use encoder::{compress, compress_bound};
pub use error::DecodeError;
