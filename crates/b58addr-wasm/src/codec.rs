//! JavaScript entry points for the codec.

use b58addr_core::{address, base58, check, Hash160, Network, Sha256Ripemd160};
use wasm_bindgen::prelude::*;
use crate::info::AddressInfo;

/// Encode bytes as Base58.
#[wasm_bindgen]
pub fn encode_base58(bytes: &[u8]) -> String {
    base58::encode(bytes)
}

/// Decode Base58 text to bytes.
#[wasm_bindgen]
pub fn decode_base58(text: &str) -> Result<Vec<u8>, JsValue> {
    base58::decode(text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode bytes as Base58Check.
#[wasm_bindgen]
pub fn encode_base58_check(bytes: &[u8]) -> String {
    check::encode_check(bytes)
}

/// Decode Base58Check text and verify its checksum.
#[wasm_bindgen]
pub fn decode_base58_check(text: &str) -> Result<Vec<u8>, JsValue> {
    check::decode_check(text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a 20-byte hash, given as hex, as an address.
#[wasm_bindgen]
pub fn hash_to_address(version: u8, hash_hex: &str) -> Result<String, JsValue> {
    let hash = parse_hash160(hash_hex).map_err(|e| JsValue::from_str(&e))?;
    Ok(address::hash_to_address(version, &hash))
}

/// Decode an address accepting versions up to `max_version`.
#[wasm_bindgen]
pub fn address_to_hash(text: &str, max_version: u8) -> Result<JsValue, JsValue> {
    decode_address_info(text, max_version)
        .map_err(|e| JsValue::from_str(&e))?
        .to_js()
}

/// Check whether an address decodes with a version up to `max_version`.
#[wasm_bindgen]
pub fn is_valid_address(text: &str, max_version: u8) -> bool {
    address::is_valid_address(text, max_version)
}

/// Derive the P2PKH address of a public key on the named network.
#[wasm_bindgen]
pub fn pubkey_to_address(pubkey: &[u8], network: &str) -> Result<String, JsValue> {
    let version = network_version(network).map_err(|e| JsValue::from_str(&e))?;
    Ok(address::pubkey_to_address(version, pubkey, &Sha256Ripemd160))
}

/// Parse a hex-encoded 160-bit hash.
pub fn parse_hash160(hash_hex: &str) -> Result<Hash160, String> {
    let bytes = hex::decode(hash_hex.trim())
        .map_err(|e| format!("Invalid hash hex: {}", e))?;

    if bytes.len() != 20 {
        return Err(format!("Hash must be 20 bytes, got {}", bytes.len()));
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&bytes);
    Ok(hash)
}

/// Look up the P2PKH version byte of a network name.
pub fn network_version(network: &str) -> Result<u8, String> {
    Network::from_str(network)
        .map(|n| n.p2pkh_version())
        .ok_or_else(|| format!("Invalid network: {}", network))
}

/// Decode an address into its serializable view.
pub fn decode_address_info(text: &str, max_version: u8) -> Result<AddressInfo, String> {
    let (version, hash) = address::address_to_hash(text, max_version)
        .map_err(|e| format!("Invalid address: {}", e))?;
    Ok(AddressInfo::new(version, &hash))
}
