//! WASM bindings for sheet export.
//!
//! Two paths: encode an already-composited pixel buffer, or run the
//! whole composite-and-encode pipeline in WASM against the software
//! raster surface (no canvas involved).

use photosheet_core::compose::{render_sheet, RasterSheet};
use photosheet_core::encode::{encode_jpeg as core_encode, jpeg_quality};
use photosheet_core::geometry::Rect;
use photosheet_core::layout::sheet_metrics;
use photosheet_core::LayoutResult;
use wasm_bindgen::prelude::*;

use crate::types::JsSourceImage;

/// Encode RGB pixel data to JPEG bytes.
///
/// `quality` uses the UI's 0.6-1.0 factor.
#[wasm_bindgen]
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: f32,
) -> Result<Vec<u8>, JsValue> {
    core_encode(pixels, width, height, jpeg_quality(quality))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Composite a full sheet in WASM and encode it as JPEG.
///
/// Renders onto the software raster surface at the fixed print profile
/// (optionally rotated), so the export matches the canvas preview
/// without round-tripping pixels through JavaScript.
#[wasm_bindgen]
pub fn export_sheet_jpeg(
    image: &JsSourceImage,
    crop: JsValue,
    layout: JsValue,
    cut_guides: bool,
    rotate_paper: bool,
    quality: f32,
) -> Result<Vec<u8>, JsValue> {
    let crop: Rect = serde_wasm_bindgen::from_value(crop)?;
    let layout: LayoutResult = serde_wasm_bindgen::from_value(layout)?;
    let metrics = sheet_metrics(rotate_paper);

    let mut sheet = RasterSheet::new(
        metrics.width_px as u32,
        metrics.height_px as u32,
        image.to_decoded(),
    );
    render_sheet(
        &mut sheet,
        metrics.width_px,
        metrics.height_px,
        &crop,
        &layout,
        cut_guides,
    );

    let width = sheet.width();
    let height = sheet.height();
    core_encode(&sheet.into_pixels(), width, height, jpeg_quality(quality))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}


/// WASM-specific tests that require JsValue. Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![128u8; 32 * 32 * 3];
        let jpeg = encode_jpeg(&pixels, 32, 32, 0.9).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let result = encode_jpeg(&[1, 2, 3], 16, 16, 0.9);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_export_sheet_jpeg_end_to_end() {
        let image = JsSourceImage::new(64, 64, vec![90u8; 64 * 64 * 3]);
        let crop = serde_wasm_bindgen::to_value(&Rect::new(8.0, 8.0, 32.0, 48.0)).unwrap();
        let layout = photosheet_core::layout::compute_layout(&photosheet_core::LayoutParams {
            sheet_width_px: 2000.0,
            sheet_height_px: 3000.0,
            rows: 2,
            columns: 2,
            spacing_mm: 1.0,
            margin_mm: 0.0,
            px_per_mm: 20.0,
            tile_aspect: 2.0 / 3.0,
        });
        let layout = serde_wasm_bindgen::to_value(&layout).unwrap();
        let jpeg = export_sheet_jpeg(&image, crop, layout, true, false, 0.8).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
