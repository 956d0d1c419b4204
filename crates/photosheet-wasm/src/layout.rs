//! WASM bindings for sheet metrics and layout.

use photosheet_core::layout::{compute_layout as core_layout, sheet_metrics as core_metrics};
use photosheet_core::LayoutParams;
use wasm_bindgen::prelude::*;

/// Pixel dimensions and density of the print sheet, as a JSON object
/// `{width_px, height_px, px_per_mm}`.
#[wasm_bindgen]
pub fn sheet_metrics(rotate_paper: bool) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&core_metrics(rotate_paper))?)
}

/// Compute tile placements and cut guides.
///
/// `params` is a JSON object matching the core `LayoutParams` record;
/// the result carries tile rectangles in row-major order plus guide
/// segments.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const layout = compute_layout({
///   sheet_width_px: metrics.width_px,
///   sheet_height_px: metrics.height_px,
///   rows: 5,
///   columns: 2,
///   spacing_mm: 1,
///   margin_mm: 0,
///   px_per_mm: metrics.px_per_mm,
///   tile_aspect: aspect,
/// });
/// ```
#[wasm_bindgen]
pub fn compute_layout(params: JsValue) -> Result<JsValue, JsValue> {
    let params: LayoutParams = serde_wasm_bindgen::from_value(params)?;
    Ok(serde_wasm_bindgen::to_value(&core_layout(&params))?)
}
