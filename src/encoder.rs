//! Encoding: the compress state machine and its emission writers.

use crate::constants::{
    extract_msbs, mark_zeros, HEADER_SIZE, LITERAL_BIT, LITERAL_LONG, MAX_INPUT_SIZE, MAX_LONG_RUN,
    MAX_SHORT_RUN, RUN_MASK, RUN_TABLE, VERBATIM_FLAG, ZEROS_LONG,
};

/// Worst-case size of [`compress`] output for an input of `input_len` bytes.
///
/// The encoder either beats this or stores the input verbatim behind the
/// 8-byte header, so the result is never larger than `input_len + 8`.
#[inline]
#[must_use]
pub const fn compress_bound(input_len: usize) -> usize {
    HEADER_SIZE + input_len
}

/// Compress `input` into `output`.
///
/// `output` is overwritten. While encoding it is resized to the scratch
/// upper bound of `8 + 2 * input.len()` bytes and truncated to the final
/// frame size before returning. If the compressed frame, header included,
/// would be larger than the input, the frame stores the input verbatim
/// instead, so the result never exceeds [`compress_bound`]`(input.len())`.
///
/// # Panics
/// Panics if `input.len()` exceeds [`MAX_INPUT_SIZE`] (2^63 - 1 bytes),
/// which the 63-bit header length cannot represent.
pub fn compress(input: &[u8], output: &mut Vec<u8>) {
    let len = input.len();
    assert!(
        len as u64 <= MAX_INPUT_SIZE,
        "input length {len} exceeds the 63-bit frame limit"
    );

    output.clear();
    output.resize(HEADER_SIZE + 2 * len, 0);
    let final_len = encode_into(input, output.as_mut_slice());
    output.truncate(final_len);
}

/// Run the state machine over `input`, writing a complete frame into the
/// pre-sized scratch buffer. Returns the frame length.
fn encode_into(input: &[u8], out: &mut [u8]) -> usize {
    let len = input.len();
    out[..HEADER_SIZE].copy_from_slice(&(len as u64).to_le_bytes());
    let mut dst = HEADER_SIZE;

    // Pending runs not yet emitted. At most one of the two is nonzero at
    // the top of each iteration, except inside the mixed-word case where
    // literals always flush before newly seen zeros.
    let mut zeros = 0usize;
    let mut literals = 0usize;
    let mut from = 0usize;
    let mut it = 0usize;

    while it + 8 <= len {
        let word = u64::from_le_bytes(input[it..it + 8].try_into().unwrap());
        if word == 0 {
            if literals > 0 {
                flush_literals(out, &mut dst, input, &mut from, &mut literals);
            }
            zeros += 8;
            it += 8;
            continue;
        }

        let mask = mark_zeros(word);
        if mask == 0 {
            // no zero byte anywhere in the word
            if zeros > 0 {
                flush_zeros(out, &mut dst, &mut zeros);
            }
            if literals == 0 {
                from = it;
            }
            literals += 8;
            it += 8;
            continue;
        }

        // mixed word: zero bytes somewhere in it, classified by layout
        let (n_zeros, run_len) = RUN_TABLE[extract_msbs(mask) as usize];
        if (zeros > 0 || n_zeros > 0) && literals > 0 {
            flush_literals(out, &mut dst, input, &mut from, &mut literals);
        }
        zeros += n_zeros as usize;
        if zeros > 0 {
            flush_zeros(out, &mut dst, &mut zeros);
            it += n_zeros as usize;
        }
        if literals == 0 {
            from = it;
        }
        it += run_len as usize;
        literals += run_len as usize;
    }

    // Final 0-7 bytes, one at a time. The word loop stops short of the end
    // so it never reads past the input.
    while it < len {
        if input[it] == 0 {
            if literals > 0 {
                flush_literals(out, &mut dst, input, &mut from, &mut literals);
            }
            zeros += 1;
        } else {
            if zeros > 0 {
                flush_zeros(out, &mut dst, &mut zeros);
            }
            if literals == 0 {
                from = it;
            }
            literals += 1;
        }
        it += 1;
    }

    // literals precede zeros in the input, so they flush first
    flush_literals(out, &mut dst, input, &mut from, &mut literals);
    flush_zeros(out, &mut dst, &mut zeros);

    // the finished frame, header included, must not exceed the raw size;
    // otherwise store the input verbatim
    if dst > len {
        out[..HEADER_SIZE].copy_from_slice(&(len as u64 | VERBATIM_FLAG).to_le_bytes());
        out[HEADER_SIZE..HEADER_SIZE + len].copy_from_slice(input);
        HEADER_SIZE + len
    } else {
        dst
    }
}

/// Emit the pending zero run as control bytes.
///
/// Runs longer than 65535 split into maximal long-form segments; a residue
/// above 254 takes one long form, anything left drains through short forms.
fn flush_zeros(out: &mut [u8], dst: &mut usize, pending: &mut usize) {
    while *pending > MAX_LONG_RUN {
        out[*dst] = ZEROS_LONG;
        out[*dst + 1..*dst + 3].copy_from_slice(&(MAX_LONG_RUN as u16).to_le_bytes());
        *dst += 3;
        *pending -= MAX_LONG_RUN;
    }
    if *pending > 2 * MAX_SHORT_RUN {
        out[*dst] = ZEROS_LONG;
        out[*dst + 1..*dst + 3].copy_from_slice(&(*pending as u16).to_le_bytes());
        *dst += 3;
        *pending = 0;
    }
    while *pending > MAX_SHORT_RUN {
        out[*dst] = MAX_SHORT_RUN as u8;
        *dst += 1;
        *pending -= MAX_SHORT_RUN;
    }
    if *pending > 0 {
        out[*dst] = *pending as u8;
        *dst += 1;
        *pending = 0;
    }
}

/// Emit the pending literal run, copying payload bytes from `input[from..]`.
///
/// Same cascade as [`flush_zeros`], with the literal bit set on every
/// control byte and the run's bytes copied behind each one.
fn flush_literals(
    out: &mut [u8],
    dst: &mut usize,
    input: &[u8],
    from: &mut usize,
    pending: &mut usize,
) {
    while *pending > MAX_LONG_RUN {
        out[*dst] = LITERAL_LONG;
        out[*dst + 1..*dst + 3].copy_from_slice(&(MAX_LONG_RUN as u16).to_le_bytes());
        *dst += 3;
        out[*dst..*dst + MAX_LONG_RUN].copy_from_slice(&input[*from..*from + MAX_LONG_RUN]);
        *dst += MAX_LONG_RUN;
        *from += MAX_LONG_RUN;
        *pending -= MAX_LONG_RUN;
    }
    if *pending > 2 * MAX_SHORT_RUN {
        out[*dst] = LITERAL_LONG;
        out[*dst + 1..*dst + 3].copy_from_slice(&(*pending as u16).to_le_bytes());
        *dst += 3;
        out[*dst..*dst + *pending].copy_from_slice(&input[*from..*from + *pending]);
        *dst += *pending;
        *from += *pending;
        *pending = 0;
    }
    while *pending > MAX_SHORT_RUN {
        out[*dst] = LITERAL_BIT | RUN_MASK;
        *dst += 1;
        out[*dst..*dst + MAX_SHORT_RUN].copy_from_slice(&input[*from..*from + MAX_SHORT_RUN]);
        *dst += MAX_SHORT_RUN;
        *from += MAX_SHORT_RUN;
        *pending -= MAX_SHORT_RUN;
    }
    if *pending > 0 {
        out[*dst] = LITERAL_BIT | *pending as u8;
        *dst += 1;
        out[*dst..*dst + *pending].copy_from_slice(&input[*from..*from + *pending]);
        *dst += *pending;
        *from += *pending;
        *pending = 0;
    }
}
