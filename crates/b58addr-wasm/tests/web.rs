#![cfg(target_arch = "wasm32")]

use b58addr_wasm::codec::{decode_base58, decode_base58_check, encode_base58, encode_base58_check};
use b58addr_wasm::{address_to_hash, hash_to_address, is_valid_address, pubkey_to_address, AddressInfo};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn base58_roundtrip() {
    let text = encode_base58(b"Hello World!");
    assert_eq!(text, "2NEpo7TZRRrLZSi2U");
    assert_eq!(decode_base58(&text).unwrap(), b"Hello World!".to_vec());
    assert!(decode_base58("0OIl").is_err());
}

#[wasm_bindgen_test]
fn base58_check_roundtrip() {
    let text = encode_base58_check(b"payload");
    assert_eq!(decode_base58_check(&text).unwrap(), b"payload".to_vec());
}

#[wasm_bindgen_test]
fn address_roundtrip() {
    let address = hash_to_address(0, "f54a5851e9372b87810a8e60cdd2e7cfd80b6e31").unwrap();
    assert_eq!(address, "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs");
    assert!(is_valid_address(&address, 0));

    let value = address_to_hash(&address, 0).unwrap();
    let info: AddressInfo = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(info.hash160, "f54a5851e9372b87810a8e60cdd2e7cfd80b6e31");
}

#[wasm_bindgen_test]
fn pubkey_address() {
    let pubkey = hex::decode("0250863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352").unwrap();
    assert_eq!(pubkey_to_address(&pubkey, "mainnet").unwrap(), "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs");
    assert!(pubkey_to_address(&pubkey, "nowhere").is_err());
}
