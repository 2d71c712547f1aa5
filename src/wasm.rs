//! WASM bindings for web hosts.

use wasm_bindgen::prelude::*;

use crate::adapter::{BridgeAdapter, Sha256Adapter};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Compute the SHA-256 digest of `input` as 64 lowercase hex characters.
/// An absent input is hashed as the empty string.
#[wasm_bindgen]
pub fn sha256_hex(input: Option<String>) -> Result<String, JsError> {
    Sha256Adapter::new()
        .call(input.as_deref())
        .map_err(|e| JsError::new(&e.to_string()))
}
