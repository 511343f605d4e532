//! Consistent Overhead Byte Stuffing/Reduced (COBS/R)
//! Original Paper: http://www.stuartcheshire.org/papers/COBSforToN.pdf
//! Wikipedia: https://en.wikipedia.org/wiki/Consistent_Overhead_Byte_Stuffing
//!
//! A variant of COBS that saves one byte of overhead in the common case: when
//! the final data byte is at least as large as the length code the final
//! block would need, the byte's value is written as the length code itself
//! and the byte is dropped from the output. The decoder reconstructs it from
//! the code, which also makes the decoder tolerant of a short final block —
//! the only decode failure is a zero byte in the input.
//!
//! Every complete COBS encoding is also a valid COBS/R encoding of the same
//! data, so this decoder accepts plain COBS output unchanged.

pub use cobs::{max_encoded_len, DecodeError};

/// Worst-case decoded length for `src_len` encoded bytes. Unlike plain COBS,
/// the reconstructed final byte means output can be as long as the input.
pub const fn max_decoded_len(src_len: usize) -> usize {
    src_len
}

/// Encodes a byte sequence using COBS/R.
///
/// The output contains no zero bytes, never exceeds
/// `max_encoded_len(src.len())`, and is never longer than the plain COBS
/// encoding of the same input. An empty input encodes to `[0x01]`.
pub fn encode(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(max_encoded_len(src.len()));
    let mut block_start = 0;
    for (idx, &byte) in src.iter().enumerate() {
        if idx - block_start == 0xfe {
            // The forced close fires before consuming the current byte, so
            // the final block always keeps its last byte available for the
            // code substitution below.
            out.push(0xff);
            out.extend_from_slice(&src[block_start..idx]);
            block_start = idx;
        }
        if byte == 0 {
            out.push((idx - block_start + 1) as u8);
            out.extend_from_slice(&src[block_start..idx]);
            block_start = idx + 1;
        }
    }
    let code = src.len() - block_start + 1;
    let last = src.last().copied().unwrap_or(0) as usize;
    if last < code {
        // Finalize exactly as plain COBS.
        out.push(code as u8);
        out.extend_from_slice(&src[block_start..]);
    } else {
        // The final byte doubles as the length code and is dropped.
        out.push(last as u8);
        out.extend_from_slice(&src[block_start..src.len() - 1]);
    }
    out
}

/// Decodes a COBS/R-encoded byte sequence.
///
/// Inverse of [`encode`] for well-formed input. A length code pointing past
/// the end of the input is not an error here: the code value itself is the
/// dropped final byte. The only failure is [`DecodeError::ZeroByteInInput`].
pub fn decode(src: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(max_decoded_len(src.len()));
    let mut idx = 0;
    while idx < src.len() {
        let code = src[idx] as usize;
        if code == 0 {
            return Err(DecodeError::ZeroByteInInput);
        }
        idx += 1;
        let end = idx + code - 1;
        let block = &src[idx..end.min(src.len())];
        if block.contains(&0) {
            return Err(DecodeError::ZeroByteInInput);
        }
        out.extend_from_slice(block);
        if end > src.len() {
            // Short final block: the length code is the dropped final byte.
            out.push(code as u8);
            break;
        }
        idx = end;
        if idx < src.len() && code != 0xff {
            out.push(0);
        }
    }
    Ok(out)
}
