//! Compact printable encoding of the grid's on/off bits.
//!
//! Bits are packed four to a character, least-significant bit first, and
//! offset from `HASH_BASE`, so every character falls in `'a'..='p'`. A
//! trailing group of fewer than four bits still produces one character with
//! the unused high bits left at zero.

use crate::constants::{HASH_BASE, HASH_BITS_PER_CHAR};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid state character {ch:?} at position {index}")]
    InvalidChar { index: usize, ch: char },
    #[error("state holds {chars} characters but the grid only fits {max}")]
    TooLong { chars: usize, max: usize },
}

const MAX_CODE: u8 = (1 << HASH_BITS_PER_CHAR) - 1;

/// Number of characters needed for `bit_count` bits.
#[inline]
pub fn encoded_len(bit_count: usize) -> usize {
    bit_count.div_ceil(HASH_BITS_PER_CHAR)
}

pub fn encode_bits<I>(bits: I) -> String
where
    I: IntoIterator<Item = bool>,
{
    let mut out = String::new();
    let mut code = 0u8;
    let mut code_len = 0usize;
    for bit in bits {
        code |= (bit as u8) << code_len;
        code_len += 1;
        if code_len == HASH_BITS_PER_CHAR {
            out.push((HASH_BASE + code) as char);
            code = 0;
            code_len = 0;
        }
    }
    if code_len > 0 {
        out.push((HASH_BASE + code) as char);
    }
    out
}

/// Unpack every character into four bits. Padding bits of the last
/// character are included; callers truncate to their own bit count.
pub fn decode_bits(encoded: &str) -> Result<Vec<bool>, CodecError> {
    let mut bits = Vec::with_capacity(encoded.len() * HASH_BITS_PER_CHAR);
    for (index, ch) in encoded.chars().enumerate() {
        let code = char_code(ch).ok_or(CodecError::InvalidChar { index, ch })?;
        for j in 0..HASH_BITS_PER_CHAR {
            bits.push((code >> j) & 1 == 1);
        }
    }
    Ok(bits)
}

/// Decode for a grid of exactly `bit_count` bits. Shorter input yields a
/// shorter prefix; longer input is rejected.
pub fn decode_for(encoded: &str, bit_count: usize) -> Result<Vec<bool>, CodecError> {
    let max = encoded_len(bit_count);
    let chars = encoded.chars().count();
    if chars > max {
        return Err(CodecError::TooLong { chars, max });
    }
    let mut bits = decode_bits(encoded)?;
    bits.truncate(bit_count);
    Ok(bits)
}

#[inline]
fn char_code(ch: char) -> Option<u8> {
    let b = u8::try_from(ch as u32).ok()?;
    let code = b.checked_sub(HASH_BASE)?;
    (code <= MAX_CODE).then_some(code)
}
