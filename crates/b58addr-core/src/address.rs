//! Version-byte addresses over Base58Check.
//!
//! An address is `Base58Check(version || hash160)`: 21 payload bytes plus a
//! 4-byte checksum. Decoding accepts any version up to a configured ceiling,
//! not just an exact match, so `max_version = 0x6f` also accepts `0x00`.

use alloc::string::String;
use thiserror::Error;

use crate::base58::Base58Error;
use crate::check::{decode_check, encode_check, CheckError};
use crate::hash::{Hash160, PubKeyHasher};

/// Length of the versioned payload: one version byte and a [`Hash160`].
pub const PAYLOAD_LEN: usize = 1 + 20;

/// Address decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The Base58Check layer rejected the text.
    #[error(transparent)]
    Check(#[from] CheckError),
    /// The checksum was valid but nothing preceded it.
    #[error("Empty address payload")]
    EmptyPayload,
    /// The payload is not a version byte followed by 20 bytes.
    #[error("Invalid address length: {0} bytes")]
    InvalidLength(usize),
    /// The version byte exceeds the accepted maximum.
    #[error("Invalid address version {version:#04x} (maximum {max:#04x})")]
    InvalidVersion { version: u8, max: u8 },
}

/// Flat classification of every decode failure in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    TooShort,
    ChecksumMismatch,
    EmptyPayload,
    InvalidLength,
    InvalidVersion,
}

impl AddressError {
    /// The failure kind, independent of which stage raised it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::Check(CheckError::Base58(Base58Error::InvalidCharacter { .. })) => {
                ErrorKind::InvalidCharacter
            }
            AddressError::Check(CheckError::TooShort(_)) => ErrorKind::TooShort,
            AddressError::Check(CheckError::ChecksumMismatch { .. }) => ErrorKind::ChecksumMismatch,
            AddressError::EmptyPayload => ErrorKind::EmptyPayload,
            AddressError::InvalidLength(_) => ErrorKind::InvalidLength,
            AddressError::InvalidVersion { .. } => ErrorKind::InvalidVersion,
        }
    }
}

/// Encode a 160-bit hash as an address with the given version byte.
pub fn hash_to_address(version: u8, hash: &Hash160) -> String {
    let mut payload = [0u8; PAYLOAD_LEN];
    payload[0] = version;
    payload[1..].copy_from_slice(hash);
    encode_check(&payload)
}

/// Decode an address into its version byte and 160-bit hash.
///
/// Any version in `0..=max_version` is accepted.
pub fn address_to_hash(address: &str, max_version: u8) -> Result<(u8, Hash160), AddressError> {
    let payload = decode_check(address)?;

    if payload.is_empty() {
        log::debug!("address: empty payload");
        return Err(AddressError::EmptyPayload);
    }

    if payload.len() != PAYLOAD_LEN {
        log::debug!("address: payload is {} bytes, expected {}", payload.len(), PAYLOAD_LEN);
        return Err(AddressError::InvalidLength(payload.len()));
    }

    let version = payload[0];
    if version > max_version {
        log::debug!("address: version {:#04x} above maximum {:#04x}", version, max_version);
        return Err(AddressError::InvalidVersion { version, max: max_version });
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload[1..]);
    Ok((version, hash))
}

/// Whether `address` decodes with a version no greater than `max_version`.
pub fn is_valid_address(address: &str, max_version: u8) -> bool {
    address_to_hash(address, max_version).is_ok()
}

/// Hash a public key and encode it as an address.
pub fn pubkey_to_address<H: PubKeyHasher + ?Sized>(version: u8, pubkey: &[u8], hasher: &H) -> String {
    hash_to_address(version, &hasher.hash160(pubkey))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::checksum;
    use crate::hash::{Sha256Ripemd160, TruncatedSha256};
    use crate::base58;

    fn hash160_from_hex(s: &str) -> Hash160 {
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&hex::decode(s).unwrap());
        hash
    }

    #[test]
    fn test_known_address() {
        let hash = hash160_from_hex("f54a5851e9372b87810a8e60cdd2e7cfd80b6e31");
        let address = hash_to_address(0x00, &hash);
        assert_eq!(address, "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs");
        assert_eq!(address_to_hash(&address, 0).unwrap(), (0x00, hash));
    }

    #[test]
    fn test_pubkey_to_address() {
        let pubkey = hex::decode(
            "0250863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352"
        ).unwrap();
        assert_eq!(
            pubkey_to_address(0x00, &pubkey, &Sha256Ripemd160),
            "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs"
        );
    }

    #[test]
    fn test_truncated_hasher_roundtrip() {
        let pubkey = b"sample public key data for testing";
        let address = pubkey_to_address(0x00, pubkey, &TruncatedSha256);
        assert!(is_valid_address(&address, 0));

        let (version, hash) = address_to_hash(&address, 0).unwrap();
        assert_eq!(version, 0);
        assert_eq!(hash, TruncatedSha256.hash160(pubkey));
    }

    #[test]
    fn test_version_ceiling() {
        let hash = [0x42u8; 20];
        let testnet = hash_to_address(0x6f, &hash);

        assert_eq!(
            address_to_hash(&testnet, 0x00),
            Err(AddressError::InvalidVersion { version: 0x6f, max: 0x00 })
        );
        assert_eq!(address_to_hash(&testnet, 0x6f).unwrap(), (0x6f, hash));
        assert_eq!(address_to_hash(&testnet, 0xff).unwrap(), (0x6f, hash));

        // Lower versions pass a higher ceiling
        let mainnet = hash_to_address(0x00, &hash);
        assert_eq!(address_to_hash(&mainnet, 0x6f).unwrap(), (0x00, hash));
    }

    #[test]
    fn test_version_one_rejected_at_zero() {
        let hash = [0x11u8; 20];
        let address = hash_to_address(0x01, &hash);
        let err = address_to_hash(&address, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidVersion);
        assert!(!is_valid_address(&address, 0));
    }

    #[test]
    fn test_empty_payload() {
        let text = encode_check(&[]);
        assert_eq!(address_to_hash(&text, 0), Err(AddressError::EmptyPayload));
    }

    #[test]
    fn test_invalid_length() {
        let short = encode_check(&[0x00; 20]);
        assert_eq!(address_to_hash(&short, 0), Err(AddressError::InvalidLength(20)));

        let long = encode_check(&[0x00; 22]);
        assert_eq!(address_to_hash(&long, 0), Err(AddressError::InvalidLength(22)));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            address_to_hash("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVNl", 0).unwrap_err().kind(),
            ErrorKind::InvalidCharacter
        );
        assert_eq!(
            address_to_hash("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN3", 0).unwrap_err().kind(),
            ErrorKind::ChecksumMismatch
        );
        assert_eq!(address_to_hash("2", 0).unwrap_err().kind(), ErrorKind::TooShort);
    }

    #[test]
    fn test_corrupted_payload_fails_checksum() {
        let hash = [0x5au8; 20];
        let mut data = [0u8; PAYLOAD_LEN + 4];
        data[1..PAYLOAD_LEN].copy_from_slice(&hash);
        let sum = checksum(&data[..PAYLOAD_LEN]);
        data[PAYLOAD_LEN..].copy_from_slice(&sum);
        data[7] ^= 0x80;

        let text = base58::encode(&data);
        assert_eq!(address_to_hash(&text, 0).unwrap_err().kind(), ErrorKind::ChecksumMismatch);
    }

    #[test]
    fn test_surrounding_whitespace_accepted() {
        assert!(is_valid_address("  1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2\n", 0));
    }
}
