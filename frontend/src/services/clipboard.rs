//! Wrapper around `navigator.clipboard.writeText`.
//!
//! Looked up through `js_sys::Reflect` so that insecure contexts (where the
//! API is simply absent) fail with a [`ClipboardError`] instead of a panic.

use edital_core::ClipboardError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Copy `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let navigator = gloo_utils::window().navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| ClipboardError(format!("{:?}", e)))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError("Clipboard API unavailable".to_string()));
    }

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| ClipboardError(format!("{:?}", e)))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| ClipboardError("writeText is not a function".to_string()))?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError(format!("{:?}", e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| ClipboardError("writeText did not return a promise".to_string()))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError(format!("Copy refused: {:?}", e)))?;

    Ok(())
}
