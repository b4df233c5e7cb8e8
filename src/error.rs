//! Error type for zb8 frame decoding.

use std::fmt;

/// Error returned when decoding a frame fails
///
/// The codec defines no runtime errors on valid frames; everything the
/// decoder can reject collapses into a single failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Frame is truncated or malformed: the header is incomplete, a segment
    /// implies a read past the end of the input, or the body does not
    /// reconstruct exactly the length the header declares
    InvalidFrame,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFrame => write!(f, "invalid frame: truncated or malformed data"),
        }
    }
}

impl std::error::Error for DecodeError {}
