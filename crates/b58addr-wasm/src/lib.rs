//! WebAssembly bindings for the Base58 address codec.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Base58 and Base58Check encoding and decoding
//! - Address encoding, decoding and validation
//! - Deriving addresses from public keys

use wasm_bindgen::prelude::*;

pub mod codec;
pub mod info;

// Re-export main types for JS access
pub use codec::{address_to_hash, hash_to_address, is_valid_address, pubkey_to_address};
pub use info::AddressInfo;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
