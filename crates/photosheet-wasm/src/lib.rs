//! Photosheet WASM - WebAssembly bindings for the Photosheet engine.
//!
//! This crate exposes the photosheet-core functionality to the
//! JavaScript/TypeScript web app: crop derivation and editing, sheet
//! layout, German ID compliance checks, canvas rendering, and export.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types and setting parsers
//! - `crop` - auto-crop, move and zoom bindings
//! - `layout` - sheet metrics and tile-grid layout bindings
//! - `compliance` - German ID warning bindings
//! - `render` - sheet compositing onto a canvas 2D context
//! - `decode` / `encode` - byte-level image import and JPEG export
//!
//! # Usage
//!
//! ```typescript
//! import init, { auto_crop, compute_layout, render_sheet } from '@photosheet/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const aspect = target_aspect("german_id", "portrait");
//! const crop = auto_crop(image.width, image.height, face, "german_id", aspect);
//! ```

use wasm_bindgen::prelude::*;

mod compliance;
mod crop;
mod decode;
mod encode;
mod layout;
mod render;
mod types;

// Re-export public bindings
pub use compliance::{german_id_checklist, german_id_warnings};
pub use crop::{auto_crop, move_crop, target_aspect, zoom_crop};
pub use decode::{decode_image, get_orientation};
pub use encode::{encode_jpeg, export_sheet_jpeg};
pub use layout::{compute_layout, sheet_metrics};
pub use render::render_sheet;
pub use types::JsSourceImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
