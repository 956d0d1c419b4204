//! WASM bindings for German ID compliance checks.

use photosheet_core::compliance::{german_id_warnings as core_warnings, GERMAN_ID_CHECKLIST};
use photosheet_core::face::FaceBox;
use photosheet_core::geometry::Rect;
use wasm_bindgen::prelude::*;

/// Evaluate a crop and face against the German ID standard.
///
/// Returns `{warnings: string[], checks_unavailable: boolean}`. `face`
/// may be `null`/`undefined`, which yields the single availability
/// warning.
#[wasm_bindgen]
pub fn german_id_warnings(
    face: JsValue,
    crop: JsValue,
    tile_height_px: f64,
) -> Result<JsValue, JsValue> {
    let face: Option<FaceBox> = if face.is_null() || face.is_undefined() {
        None
    } else {
        Some(serde_wasm_bindgen::from_value(face)?)
    };
    let crop: Rect = serde_wasm_bindgen::from_value(crop)?;
    let result = core_warnings(face.as_ref(), &crop, tile_height_px);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// The static shooting-condition checklist shown next to the warnings.
#[wasm_bindgen]
pub fn german_id_checklist() -> Vec<String> {
    GERMAN_ID_CHECKLIST.iter().map(|s| s.to_string()).collect()
}
