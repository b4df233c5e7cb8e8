//! Decoding: header dispatch and the control-byte loop.

use crate::constants::{HEADER_SIZE, LITERAL_BIT, MAX_LONG_RUN, RUN_MASK, VERBATIM_FLAG};
use crate::error::DecodeError;

/// Read the uncompressed length out of a frame header without decoding.
///
/// # Errors
/// Returns [`DecodeError::InvalidFrame`] if `frame` is shorter than the
/// 8-byte header.
pub fn decompressed_size(frame: &[u8]) -> Result<u64, DecodeError> {
    let header = read_header(frame)?;
    Ok(header & !VERBATIM_FLAG)
}

/// Decompress a frame produced by [`compress`](crate::compress) into
/// `output`.
///
/// `output` is overwritten; any prior content is discarded and its length
/// is set from the frame header. The decoder validates every segment:
/// reads past the end of `input` and writes past the declared length are
/// rejected rather than assumed away.
///
/// # Errors
/// Returns [`DecodeError::InvalidFrame`] if the header is incomplete, a
/// segment is truncated, or the body does not reconstruct exactly the
/// length the header declares.
pub fn decompress(input: &[u8], output: &mut Vec<u8>) -> Result<(), DecodeError> {
    let header = read_header(input)?;
    let len =
        usize::try_from(header & !VERBATIM_FLAG).map_err(|_| DecodeError::InvalidFrame)?;
    let body = &input[HEADER_SIZE..];

    output.clear();
    if header & VERBATIM_FLAG != 0 {
        if body.len() != len {
            return Err(DecodeError::InvalidFrame);
        }
        output.extend_from_slice(body);
        return Ok(());
    }

    // A body yields at most 65535 logical bytes per 3 body bytes (one
    // maximal long-form zero run), so a declared length beyond that
    // ceiling can never validate; reject it before allocating.
    if len as u128 > body.len() as u128 * (MAX_LONG_RUN / 3) as u128 {
        return Err(DecodeError::InvalidFrame);
    }

    // The zero fill is load-bearing: zero-run segments only advance the
    // write cursor and never touch the bytes they cover.
    output.resize(len, 0);
    let out = output.as_mut_slice();
    let mut dst = 0usize;
    let mut it = 0usize;

    while it < body.len() {
        let control = body[it];
        it += 1;
        if control & LITERAL_BIT != 0 {
            let run = match control & RUN_MASK {
                0 => read_long_len(body, &mut it)?,
                n => n as usize,
            };
            let src = body.get(it..it + run).ok_or(DecodeError::InvalidFrame)?;
            let dest = out.get_mut(dst..dst + run).ok_or(DecodeError::InvalidFrame)?;
            dest.copy_from_slice(src);
            it += run;
            dst += run;
        } else {
            let run = match control {
                0 => read_long_len(body, &mut it)?,
                n => n as usize,
            };
            dst += run;
            if dst > len {
                return Err(DecodeError::InvalidFrame);
            }
        }
    }

    if dst == len {
        Ok(())
    } else {
        Err(DecodeError::InvalidFrame)
    }
}

#[inline]
fn read_header(frame: &[u8]) -> Result<u64, DecodeError> {
    let header: [u8; HEADER_SIZE] = frame
        .get(..HEADER_SIZE)
        .and_then(|h| h.try_into().ok())
        .ok_or(DecodeError::InvalidFrame)?;
    Ok(u64::from_le_bytes(header))
}

/// Read the 2-byte little-endian length of a long-form segment.
#[inline]
fn read_long_len(body: &[u8], it: &mut usize) -> Result<usize, DecodeError> {
    let bytes = body.get(*it..*it + 2).ok_or(DecodeError::InvalidFrame)?;
    *it += 2;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]) as usize)
}
