//! Tauri Command Wrappers
//!
//! Frontend bindings to shell commands.

use wasm_bindgen::prelude::*;
use crate::models::Product;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Turn a rejected invoke promise into a readable message
fn rejection_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// ========================
// Catalog Commands
// ========================

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let result = invoke("fetch_products", JsValue::NULL)
        .await
        .map_err(rejection_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| format!("Response error: {}", e))
}
