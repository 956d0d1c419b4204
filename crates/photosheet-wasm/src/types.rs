//! WASM-compatible wrapper types and parsing helpers.
//!
//! This module bridges the core types to JavaScript: the source image as
//! an owned pixel buffer in WASM memory, and the string-valued mode and
//! orientation settings the UI passes around.

use photosheet_core::decode::DecodedImage;
use photosheet_core::{Mode, Orientation};
use wasm_bindgen::prelude::*;

/// A decoded source image held in WASM memory.
///
/// Wraps the core image type with a JavaScript-friendly interface. The
/// pixel data stays in WASM memory; `pixels()` copies it out as a
/// `Uint8Array` when JavaScript needs it (for example to build an
/// ImageData for canvas display).
#[wasm_bindgen]
pub struct JsSourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Create a new source image from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsSourceImage {
        JsSourceImage {
            width,
            height,
            pixels,
        }
    }

    /// Image width in pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 3).
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// RGB pixel data as a Uint8Array (copies out of WASM memory).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly release WASM memory. Optional; the wasm-bindgen
    /// finalizer handles cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsSourceImage {
    /// Wrap a core decoded image.
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert to a core decoded image. Clones the pixel data.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Parse the UI's mode string ("friend" or "german_id").
///
/// Returns the error as a `String` so it stays testable on native
/// targets; bindings map it onto `JsValue` at the boundary.
pub(crate) fn parse_mode(mode: &str) -> Result<Mode, String> {
    match mode {
        "friend" => Ok(Mode::Friend),
        "german_id" => Ok(Mode::GermanId),
        other => Err(format!("Unknown mode: {other}")),
    }
}

/// Parse the UI's orientation string ("portrait" or "landscape").
pub(crate) fn parse_orientation(orientation: &str) -> Result<Orientation, String> {
    match orientation {
        "portrait" => Ok(Orientation::Portrait),
        "landscape" => Ok(Orientation::Landscape),
        other => Err(format!("Unknown orientation: {other}")),
    }
}
