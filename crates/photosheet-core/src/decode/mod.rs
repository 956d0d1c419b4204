//! Source-image decoding for Photosheet.
//!
//! Handles the two formats the uploader passes through directly (JPEG
//! and PNG) and normalizes EXIF orientation so the rest of the crate can
//! treat width/height as what the user sees. HEIC files are converted to
//! JPEG before they reach this module; the face-detection model receives
//! the decoded image as-is.
//!
//! All operations are synchronous; from WASM they run inside a Web
//! Worker.

mod load;
mod types;

pub use load::{decode_image, get_orientation};
pub use types::{DecodeError, DecodedImage, ExifOrientation};
