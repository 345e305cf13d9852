//! Serializable views of decoded addresses.

use b58addr_core::{Hash160, Network};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// A decoded address, as handed to JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    /// The version byte.
    pub version: u8,
    /// The 160-bit hash as lowercase hex.
    pub hash160: String,
    /// Name of the network whose P2PKH version matches, if any.
    pub network: Option<String>,
}

impl AddressInfo {
    /// Build the view of a decoded `(version, hash)` pair.
    pub fn new(version: u8, hash: &Hash160) -> Self {
        let network = [Network::Mainnet, Network::Testnet]
            .into_iter()
            .find(|n| n.p2pkh_version() == version)
            .map(|n| n.name().to_string());

        AddressInfo {
            version,
            hash160: hex::encode(hash),
            network,
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
