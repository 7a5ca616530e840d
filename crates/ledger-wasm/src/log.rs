//! Leveled logging to the browser console.

use wasm_bindgen::JsValue;

/// Log an informational message.
pub fn info(message: &str) {
    web_sys::console::info_1(&JsValue::from_str(message));
}

/// Log a warning.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// Log an error.
pub fn error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
