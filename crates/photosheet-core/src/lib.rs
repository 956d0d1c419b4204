//! Photosheet Core - print-sheet geometry and compositing engine.
//!
//! This crate turns one portrait photo into a print-ready multi-tile
//! sheet: deriving a face-anchored crop, applying interactive crop
//! edits under aspect and bounds constraints, computing a centered tile
//! grid over a fixed physical print profile, compositing the crop into
//! every tile, and running advisory biometric checks for German ID
//! photos.
//!
//! Everything geometric is a pure, synchronous function over in-memory
//! dimensions; only decode/encode touch bytes. Callers recompute derived
//! results (crop, layout, warnings) whenever an input changes - nothing
//! here caches.

pub mod compliance;
pub mod compose;
pub mod crop;
pub mod decode;
pub mod encode;
pub mod face;
pub mod geometry;
pub mod layout;
pub mod settings;

use serde::{Deserialize, Serialize};

pub use compliance::{german_id_warnings, IdWarningResult, GERMAN_ID_CHECKLIST};
pub use compose::{render_sheet, DrawSurface, RasterSheet};
pub use crop::{auto_crop_from_face, move_crop, zoom_crop, AutoCropOptions};
pub use face::{select_best_face, FaceBox, FaceDetector};
pub use geometry::{center_crop, clamp_rect, Rect};
pub use layout::{compute_layout, sheet_metrics, LayoutParams, LayoutResult, SheetMetrics};
pub use settings::SheetSettings;

/// Print mode: casual friend photos or regulation German ID photos.
///
/// The mode selects the tile aspect ratio, the auto-crop head-ratio and
/// eye-line targets, and whether biometric checks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Casual 2:3 prints.
    #[default]
    Friend,
    /// German ID / passport photos (35x45 mm, portrait only).
    GermanId,
}

/// Tile orientation. Ignored in German ID mode, which is always portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// The crop and tile aspect ratio (width / height) for a mode.
///
/// German ID photos are 35x45 mm regardless of orientation; friend mode
/// is 2:3 portrait or 3:2 landscape.
pub fn target_aspect(mode: Mode, orientation: Orientation) -> f64 {
    match mode {
        Mode::GermanId => 35.0 / 45.0,
        Mode::Friend => match orientation {
            Orientation::Portrait => 2.0 / 3.0,
            Orientation::Landscape => 3.0 / 2.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_aspect_german_id_ignores_orientation() {
        assert_eq!(
            target_aspect(Mode::GermanId, Orientation::Portrait),
            35.0 / 45.0
        );
        assert_eq!(
            target_aspect(Mode::GermanId, Orientation::Landscape),
            35.0 / 45.0
        );
    }

    #[test]
    fn test_target_aspect_friend_by_orientation() {
        assert_eq!(target_aspect(Mode::Friend, Orientation::Portrait), 2.0 / 3.0);
        assert_eq!(
            target_aspect(Mode::Friend, Orientation::Landscape),
            3.0 / 2.0
        );
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(serde_json::to_string(&Mode::Friend).unwrap(), "\"friend\"");
        assert_eq!(
            serde_json::to_string(&Mode::GermanId).unwrap(),
            "\"german_id\""
        );
    }
}
