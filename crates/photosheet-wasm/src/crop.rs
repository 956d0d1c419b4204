//! WASM bindings for crop derivation and editing.
//!
//! Rectangles and faces cross the boundary as plain JSON objects via
//! serde_wasm_bindgen, matching the shapes the TypeScript UI already
//! uses (`{x, y, width, height}` and the face-box record).

use photosheet_core::face::FaceBox;
use photosheet_core::geometry::Rect;
use photosheet_core::{
    auto_crop_from_face, move_crop as core_move, zoom_crop as core_zoom, AutoCropOptions,
};
use wasm_bindgen::prelude::*;

use crate::types::{parse_mode, parse_orientation};

/// The crop/tile aspect ratio for a mode and orientation.
///
/// German ID is always 35:45; friend mode is 2:3 or 3:2 by orientation.
#[wasm_bindgen]
pub fn target_aspect(mode: &str, orientation: &str) -> Result<f64, JsValue> {
    let mode = parse_mode(mode)?;
    let orientation = parse_orientation(orientation)?;
    Ok(photosheet_core::target_aspect(mode, orientation))
}

/// Derive the initial crop rectangle for an image.
///
/// `face` is a face-box object or `null`/`undefined`; without a face the
/// crop falls back to the largest centered rectangle of the aspect.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const crop = auto_crop(image.width, image.height, face, "german_id", aspect);
/// ```
#[wasm_bindgen]
pub fn auto_crop(
    image_width: f64,
    image_height: f64,
    face: JsValue,
    mode: &str,
    aspect: f64,
) -> Result<JsValue, JsValue> {
    let mode = parse_mode(mode)?;
    let face: Option<FaceBox> = if face.is_null() || face.is_undefined() {
        None
    } else {
        Some(serde_wasm_bindgen::from_value(face)?)
    };
    let crop = auto_crop_from_face(
        image_width,
        image_height,
        face.as_ref(),
        AutoCropOptions { mode, aspect },
    );
    Ok(serde_wasm_bindgen::to_value(&crop)?)
}

/// Translate a crop by a drag delta, clamped into the image.
#[wasm_bindgen]
pub fn move_crop(
    rect: JsValue,
    delta_x: f64,
    delta_y: f64,
    image_width: f64,
    image_height: f64,
) -> Result<JsValue, JsValue> {
    let rect: Rect = serde_wasm_bindgen::from_value(rect)?;
    let moved = core_move(&rect, delta_x, delta_y, image_width, image_height);
    Ok(serde_wasm_bindgen::to_value(&moved)?)
}

/// Zoom a crop about its center, preserving aspect and bounds.
#[wasm_bindgen]
pub fn zoom_crop(
    rect: JsValue,
    zoom_factor: f64,
    image_width: f64,
    image_height: f64,
    aspect: f64,
) -> Result<JsValue, JsValue> {
    let rect: Rect = serde_wasm_bindgen::from_value(rect)?;
    let zoomed = core_zoom(&rect, zoom_factor, image_width, image_height, aspect);
    Ok(serde_wasm_bindgen::to_value(&zoomed)?)
}

/// WASM-specific tests that require JsValue. Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_target_aspect_german_id() {
        let aspect = target_aspect("german_id", "landscape").unwrap();
        assert!((aspect - 35.0 / 45.0).abs() < 1e-9);
    }

    #[wasm_bindgen_test]
    fn test_target_aspect_unknown_mode_errors() {
        assert!(target_aspect("passport", "portrait").is_err());
    }

    #[wasm_bindgen_test]
    fn test_auto_crop_without_face() {
        let aspect = 2.0 / 3.0;
        let crop = auto_crop(1200.0, 1800.0, JsValue::NULL, "friend", aspect).unwrap();
        let crop: Rect = serde_wasm_bindgen::from_value(crop).unwrap();
        assert!((crop.aspect() - aspect).abs() < 1e-4);
        assert!(crop.x >= 0.0 && crop.y >= 0.0);
    }

    #[wasm_bindgen_test]
    fn test_zoom_crop_stays_in_bounds() {
        let aspect = 2.0 / 3.0;
        let rect = serde_wasm_bindgen::to_value(&Rect::new(0.0, 0.0, 600.0, 900.0)).unwrap();
        let zoomed = zoom_crop(rect, 0.4, 1000.0, 1500.0, aspect).unwrap();
        let zoomed: Rect = serde_wasm_bindgen::from_value(zoomed).unwrap();
        assert!(zoomed.is_within(1000.0, 1500.0, 1e-6));
    }
}
