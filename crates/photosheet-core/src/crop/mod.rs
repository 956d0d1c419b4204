//! Crop derivation and interactive crop editing.
//!
//! A crop rectangle describes which region of the source image gets
//! printed into every tile. It is derived once at upload time
//! ([`auto_crop_from_face`]) and then adjusted by user gestures
//! ([`move_crop`], [`zoom_crop`]).
//!
//! # Invariants
//!
//! Every function here returns a rectangle that:
//! 1. Lies fully inside the source image bounds
//! 2. Matches the target aspect ratio (moves keep the existing size)
//!
//! These hold for any finite input; there is no error path.

mod adjust;
mod auto;

pub use adjust::{move_crop, zoom_crop, MAX_ZOOM, MIN_ZOOM};
pub use auto::{auto_crop_from_face, AutoCropOptions};
