//! Base58 address codec.
//!
//! This crate provides pure Rust implementations of:
//! - Arbitrary-precision base-256 to base-58 conversion
//! - Base58 encoding and decoding with leading-zero preservation
//! - Base58Check (double SHA256 checksum) encoding and verification
//! - Version-byte addresses over a 160-bit hash

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod base58;
pub mod bignum;
pub mod check;
pub mod hash;
pub mod network;

pub use address::{
    address_to_hash, hash_to_address, is_valid_address, pubkey_to_address, AddressError, ErrorKind,
};
pub use base58::{decode, encode, Base58Error};
pub use check::{decode_check, encode_check, CheckError};
pub use hash::{double_sha256, Hash160, Hash256, PubKeyHasher, Sha256Ripemd160, TruncatedSha256};
pub use network::{Network, ADDRESS_VERSION};
