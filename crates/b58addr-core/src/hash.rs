//! Digest functions used by the checksum and address codecs.

use alloc::string::String;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// A 160-bit hash (20 bytes), the identity carried by an address.
pub type Hash160 = [u8; 20];

/// A 256-bit hash (32 bytes).
pub type Hash256 = [u8; 32];

/// Double SHA256: SHA256(SHA256(data)).
///
/// The first four bytes of this digest form the Base58Check checksum.
#[inline]
pub fn double_sha256(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut result = [0u8; 32];
    result.copy_from_slice(&second);
    result
}

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> Hash256 {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Reduces a public key to the 160-bit identity encoded in an address.
pub trait PubKeyHasher {
    fn hash160(&self, pubkey: &[u8]) -> Hash160;
}

/// RIPEMD160(SHA256(pubkey)), the digest deployed Bitcoin-style networks use.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Ripemd160;

impl PubKeyHasher for Sha256Ripemd160 {
    fn hash160(&self, pubkey: &[u8]) -> Hash160 {
        let hash = Ripemd160::digest(Sha256::digest(pubkey));
        let mut result = [0u8; 20];
        result.copy_from_slice(&hash);
        result
    }
}

/// First 20 bytes of SHA256(pubkey).
///
/// Not interoperable with real networks. Kept to reproduce addresses made by
/// tooling that used this shortcut.
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncatedSha256;

impl PubKeyHasher for TruncatedSha256 {
    fn hash160(&self, pubkey: &[u8]) -> Hash160 {
        let hash = sha256(pubkey);
        let mut result = [0u8; 20];
        result.copy_from_slice(&hash[..20]);
        result
    }
}

/// Lowercase hex rendering of a digest.
pub fn to_hex(hash: &[u8]) -> String {
    hex::encode(hash)
}
