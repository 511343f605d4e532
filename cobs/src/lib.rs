//! Consistent Overhead Byte Stuffing
//! Original Paper: http://www.stuartcheshire.org/papers/COBSforToN.pdf
//! IETF Draft: https://tools.ietf.org/html/draft-ietf-pppext-cobs-00
//! Wikipedia: https://en.wikipedia.org/wiki/Consistent_Overhead_Byte_Stuffing
//!
//! The encoded form contains no zero bytes, so a zero can be used as an
//! unambiguous packet delimiter on the wire. Finding delimiters in a live
//! stream is up to the caller; this crate only transforms whole packets.

use thiserror::Error;

/// Decoding failure. Encoding never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A length code or payload byte was zero. Zero bytes never appear in a
    /// well-formed encoding; this signals corrupted framing.
    #[error("zero byte found in input")]
    ZeroByteInInput,
    /// A length code claimed more payload bytes than remain in the input.
    #[error("not enough input bytes for length code")]
    TruncatedBlock,
}

/// Worst-case encoded length for `src_len` input bytes: one length code per
/// started 254-byte block, plus one for the empty input/trailing-zero case.
pub const fn max_encoded_len(src_len: usize) -> usize {
    src_len + src_len / 254 + 1
}

/// Worst-case decoded length for `src_len` encoded bytes. A well-formed
/// encoding is always at least one byte longer than its payload.
pub const fn max_decoded_len(src_len: usize) -> usize {
    src_len.saturating_sub(1)
}

/// Encodes a byte sequence using COBS.
///
/// The output contains no zero bytes and never exceeds
/// `max_encoded_len(src.len())`. An empty input encodes to `[0x01]`.
pub fn encode(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(max_encoded_len(src.len()));
    let mut block_start = 0;
    // An empty block is still emitted at the end unless the input stopped
    // exactly at a forced close.
    let mut open_block = true;
    for (idx, &byte) in src.iter().enumerate() {
        if byte == 0 {
            out.push((idx - block_start + 1) as u8);
            out.extend_from_slice(&src[block_start..idx]);
            block_start = idx + 1;
            open_block = true;
        } else if idx - block_start == 0xfd {
            // 254th non-zero byte in a row: force-close with code 0xff.
            out.push(0xff);
            out.extend_from_slice(&src[block_start..=idx]);
            block_start = idx + 1;
            open_block = false;
        }
    }
    if block_start != src.len() || open_block {
        out.push((src.len() - block_start + 1) as u8);
        out.extend_from_slice(&src[block_start..]);
    }
    out
}

/// Decodes a COBS-encoded byte sequence.
///
/// Inverse of [`encode`] for well-formed input. Malformed input fails with
/// [`DecodeError`] and no partial output.
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
        // Zeros among the bytes actually present are reported before a
        // truncated final block is.
        let block = &src[idx..end.min(src.len())];
        if block.contains(&0) {
            return Err(DecodeError::ZeroByteInInput);
        }
        out.extend_from_slice(block);
        if end > src.len() {
            return Err(DecodeError::TruncatedBlock);
        }
        idx = end;
        if idx < src.len() && code != 0xff {
            out.push(0);
        }
    }
    Ok(out)
}
