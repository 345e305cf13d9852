//! Base58Check: Base58 with a trailing 4-byte double-SHA256 checksum.

use alloc::string::String;
use alloc::vec::Vec;
use thiserror::Error;

use crate::base58::{self, Base58Error};
use crate::hash::double_sha256;

/// Number of checksum bytes appended to the payload.
pub const CHECKSUM_LEN: usize = 4;

/// Base58Check decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The text is not valid Base58.
    #[error(transparent)]
    Base58(#[from] Base58Error),
    /// Fewer bytes than a checksum decoded.
    #[error("Decoded data too short: {0} bytes")]
    TooShort(usize),
    /// The trailing checksum does not match the payload.
    #[error("Checksum mismatch: expected {expected:02x?}, found {found:02x?}")]
    ChecksumMismatch {
        expected: [u8; CHECKSUM_LEN],
        found: [u8; CHECKSUM_LEN],
    },
}

/// Checksum of a payload: the first four bytes of its double SHA256.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = double_sha256(payload);
    let mut result = [0u8; CHECKSUM_LEN];
    result.copy_from_slice(&hash[..CHECKSUM_LEN]);
    result
}

/// Encode a payload with its checksum appended.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    base58::encode(&data)
}

/// Decode Base58Check text and return the payload with the checksum removed.
pub fn decode_check(input: &str) -> Result<Vec<u8>, CheckError> {
    let mut decoded = base58::decode(input)?;

    if decoded.len() < CHECKSUM_LEN {
        log::debug!("base58check: {} bytes is too short for a checksum", decoded.len());
        return Err(CheckError::TooShort(decoded.len()));
    }

    let split = decoded.len() - CHECKSUM_LEN;
    let mut found = [0u8; CHECKSUM_LEN];
    found.copy_from_slice(&decoded[split..]);
    decoded.truncate(split);

    let expected = checksum(&decoded);
    if expected != found {
        log::debug!("base58check: checksum mismatch over {} payload bytes", decoded.len());
        return Err(CheckError::ChecksumMismatch { expected, found });
    }

    Ok(decoded)
}
