//! Base58 text encoding.
//!
//! The alphabet leaves out `0`, `O`, `I` and `l`, which look alike in many
//! fonts. Text is big-endian: the first character is the most significant
//! digit, and every leading zero byte is written as one `'1'`.

use alloc::string::String;
use alloc::vec::Vec;
use thiserror::Error;

use crate::bignum::{bytes_to_digits, digits_to_bytes};

/// The 58-symbol alphabet; a symbol's digit value is its index.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Sentinel for bytes outside the alphabet in [`DIGIT_MAP`].
const INVALID: u8 = 0xFF;

/// Reverse lookup from ASCII byte to digit value.
static DIGIT_MAP: [u8; 128] = build_digit_map();

const fn build_digit_map() -> [u8; 128] {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

/// Base58 decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base58Error {
    /// A character outside the alphabet, followed by something other than
    /// whitespace.
    #[error("Invalid Base58 character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },
}

/// Whitespace tolerated around Base58 text.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Digit value of `c`, if it belongs to the alphabet.
fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DIGIT_MAP[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Encode bytes as Base58 text.
///
/// Never fails; the empty buffer encodes to the empty string.
pub fn encode(input: &[u8]) -> String {
    if input.is_empty() {
        return String::new();
    }

    let leading_zeros = input.iter().take_while(|&&b| b == 0).count();
    let digits = bytes_to_digits(input);

    let mut result = String::with_capacity(input.len() * 138 / 100 + 1);
    for _ in 0..leading_zeros {
        result.push(ALPHABET[0] as char);
    }
    // Digits come least significant first
    for &digit in digits.iter().rev() {
        result.push(ALPHABET[digit as usize] as char);
    }

    result
}

/// Decode Base58 text to bytes.
///
/// Leading whitespace is skipped. Decoding stops at the first character
/// outside the alphabet if only whitespace follows it; otherwise that
/// character is reported. Empty (or all-whitespace) text decodes to an empty
/// buffer.
pub fn decode(input: &str) -> Result<Vec<u8>, Base58Error> {
    let offset = input.len() - input.trim_start_matches(is_space).len();
    let text = &input[offset..];

    let mut digits = Vec::with_capacity(text.len());
    for (pos, c) in text.char_indices() {
        match digit_value(c) {
            Some(value) => digits.push(value),
            None if text[pos..].chars().all(is_space) => break,
            None => {
                let index = offset + pos;
                log::debug!("base58: rejecting {:?} at byte {}", c, index);
                return Err(Base58Error::InvalidCharacter { character: c, index });
            }
        }
    }

    let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();
    let magnitude = digits_to_bytes(&digits[leading_zeros..]);

    let mut result = Vec::with_capacity(leading_zeros + magnitude.len());
    result.resize(leading_zeros, 0u8);
    result.extend_from_slice(&magnitude);

    log::trace!("base58: decoded {} chars to {} bytes", digits.len(), result.len());
    Ok(result)
}
