//! Arbitrary-precision conversion between base-256 and base-58.
//!
//! Magnitudes are plain unsigned byte vectors, so there is no sign byte to
//! guard against or strip. Leading zero bytes carry no magnitude and are the
//! caller's to account for (see [`crate::base58`]).

use alloc::vec::Vec;

/// Radix of the digit side of the conversion.
pub const RADIX: u32 = 58;

/// Convert a big-endian magnitude to base-58 digits, least significant first.
///
/// Divides the magnitude by 58 until the quotient is zero, collecting the
/// remainders. Zero (including an empty or all-zero buffer) yields no digits.
pub fn bytes_to_digits(bytes: &[u8]) -> Vec<u8> {
    let start = bytes.iter().take_while(|&&b| b == 0).count();
    let mut magnitude: Vec<u8> = bytes[start..].to_vec();
    let mut digits = Vec::with_capacity(bytes.len() * 138 / 100 + 1);

    while !magnitude.is_empty() {
        let mut quotient = Vec::with_capacity(magnitude.len());
        let mut remainder = 0u32;

        for &byte in &magnitude {
            let acc = (remainder << 8) | byte as u32;
            let q = acc / RADIX;
            remainder = acc % RADIX;
            // Skip leading zeros of the quotient
            if q != 0 || !quotient.is_empty() {
                quotient.push(q as u8);
            }
        }

        digits.push(remainder as u8);
        magnitude = quotient;
    }

    digits
}

/// Convert base-58 digits, most significant first, to a minimal big-endian
/// magnitude.
///
/// Accumulates by multiply-by-58-and-add. Zero yields an empty buffer.
/// Every digit must be below [`RADIX`].
pub fn digits_to_bytes(digits: &[u8]) -> Vec<u8> {
    // Little-endian while accumulating
    let mut magnitude: Vec<u8> = Vec::with_capacity(digits.len() * 733 / 1000 + 1);

    for &digit in digits {
        debug_assert!((digit as u32) < RADIX, "digit out of range: {}", digit);

        let mut carry = digit as u32;
        for byte in magnitude.iter_mut() {
            let acc = (*byte as u32) * RADIX + carry;
            *byte = (acc & 0xFF) as u8;
            carry = acc >> 8;
        }

        while carry > 0 {
            magnitude.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    magnitude.reverse();
    magnitude
}
