//! WASM bindings for Dotlib Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { parse_liberty } from 'dotlib_core';
//!
//! await init();
//!
//! try {
//!   const text = parse_liberty(source, false);
//! } catch (diagnostics) {
//!   console.error(diagnostics);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::config::ParserConfig;
use crate::diagnostic::Diagnostic;
use crate::syntax::parse_with;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Parse Liberty text and return it re-printed.
///
/// On failure the error is a string with one rendered diagnostic per line.
#[wasm_bindgen]
pub fn parse_liberty(text: &str, allow_no_semicolon: bool) -> Result<String, JsValue> {
    let config = ParserConfig::new().with_allow_no_semicolon(allow_no_semicolon);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    match parse_with(text, &config, &mut diagnostics) {
        Ok(library) => Ok(library.to_string()),
        Err(_) => {
            let rendered: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
            Err(JsValue::from_str(&rendered.join("\n")))
        }
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
