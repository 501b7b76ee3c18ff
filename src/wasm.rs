//! WASM bindings for collatz-path.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::StyleConfig;

/// Render the merged tree of starting numbers 1..=count with default style.
#[wasm_bindgen]
pub fn render(count: u32, width: f64, height: f64) -> Result<String, JsError> {
    let numbers: Vec<i64> = (1..=count as i64).collect();
    crate::render_svg(&numbers, &StyleConfig::default(), width, height)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Render with full control over the style.
///
/// `style_json` is a JSON object of style parameters; missing fields fall
/// back to the defaults.
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    count: u32,
    width: f64,
    height: f64,
    style_json: &str,
) -> Result<String, JsError> {
    let style: StyleConfig =
        serde_json::from_str(style_json).map_err(|e| JsError::new(&e.to_string()))?;
    let numbers: Vec<i64> = (1..=count as i64).collect();
    crate::render_svg(&numbers, &style, width, height).map_err(|e| JsError::new(&e.to_string()))
}
