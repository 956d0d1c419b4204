//! WASM bindings for source-image decoding.
//!
//! The web app normally decodes through `createImageBitmap`; these
//! bindings cover hosts without it (workers, tests) and expose the EXIF
//! orientation probe the uploader uses to decide whether a file needs
//! re-orienting.

use photosheet_core::decode::{decode_image as core_decode, get_orientation as core_orientation};
use wasm_bindgen::prelude::*;

use crate::types::JsSourceImage;

/// Decode JPEG or PNG bytes into an upright source image.
///
/// EXIF orientation is applied, so the returned width/height are what
/// the user sees.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsSourceImage, JsValue> {
    let decoded = core_decode(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsSourceImage::from_decoded(decoded))
}

/// The EXIF orientation value (1-8) of an image file, 1 when absent.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    core_orientation(bytes) as u8
}
