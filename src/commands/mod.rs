//! Browser Bindings
//!
//! Storage, catalog fetch and configuration, organized by concern.

mod catalog;
mod config;
mod storage;

pub use catalog::*;
pub use config::*;
pub use storage::*;

use wasm_bindgen::JsValue;

/// Render a JS exception for logs and error strings
fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
