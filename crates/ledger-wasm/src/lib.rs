//! WebAssembly bindings for the proof-of-work ledger.
//!
//! This crate exposes three operations to JavaScript:
//! - Mining the next block
//! - Reading the full chain
//! - Checking chain validity

use wasm_bindgen::prelude::*;

pub mod log;
pub mod node;
pub mod response;

pub use node::LedgerNode;

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
