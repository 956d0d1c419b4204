//! Biometric compliance checks for German ID photos.
//!
//! Advisory only: the warnings never block rendering or export. All
//! thresholds follow the German passport-photo standard for head size
//! and eye position (target head ratio ~70% of the photo height, eyes in
//! the upper-middle band).

use serde::{Deserialize, Serialize};

use crate::face::FaceBox;
use crate::geometry::Rect;

/// Head ratio below which the head counts as too small.
const HEAD_RATIO_MIN: f64 = 0.62;
/// Head ratio above which the head counts as too large.
const HEAD_RATIO_MAX: f64 = 0.78;
/// Eye-line ratio above which the eyes are too high in the frame.
const EYES_RATIO_HIGH: f64 = 0.35;
/// Eye-line ratio below which the eyes are too low in the frame.
const EYES_RATIO_LOW: f64 = 0.50;
/// Preferred eye-line band (soft warning outside it).
const EYES_BAND_MIN: f64 = 0.38;
const EYES_BAND_MAX: f64 = 0.45;
/// Maximum horizontal face offset as a fraction of crop width.
const CENTER_OFFSET_MAX: f64 = 0.08;
/// Minimum printed tile height for acceptable ID quality.
const MIN_TILE_HEIGHT_PX: f64 = 500.0;

/// Outcome of the German ID checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdWarningResult {
    /// Human-readable warnings, in fixed check order.
    pub warnings: Vec<String>,
    /// True when no face was supplied and the checks could not run.
    pub checks_unavailable: bool,
}

/// Static shooting-condition checklist shown alongside the warnings.
pub const GERMAN_ID_CHECKLIST: [&str; 4] = [
    "Neutral expression, mouth closed.",
    "Even lighting, no shadows on face.",
    "No head covering or tinted glasses.",
    "Plain, light-colored background.",
];

/// Evaluate a crop and detected face against the German ID standard.
///
/// Checks run independently in a fixed order (head ratio, eye line,
/// centering, resolution) and multiple warnings may co-occur. The eye
/// checks are a single three-tier chain: the strict too-high/too-low
/// warnings take precedence, and only values inside `(0.35, 0.50)` but
/// outside the preferred `[0.38, 0.45]` band get the softer warning.
///
/// Without a face, a single availability warning is returned and
/// `checks_unavailable` is set; the resolution check is skipped too.
pub fn german_id_warnings(
    face: Option<&FaceBox>,
    crop: &Rect,
    tile_height_px: f64,
) -> IdWarningResult {
    let Some(face) = face else {
        return IdWarningResult {
            warnings: vec!["No face detected, biometric checks unavailable.".to_string()],
            checks_unavailable: true,
        };
    };

    let mut warnings = Vec::new();

    let head_ratio = face.height / crop.height;
    if head_ratio < HEAD_RATIO_MIN {
        warnings.push("Head too small (target ~70%).".to_string());
    }
    if head_ratio > HEAD_RATIO_MAX {
        warnings.push("Head too large (target ~70%).".to_string());
    }

    if let Some(eyes_y) = face.eyes_y {
        let eyes_ratio = (eyes_y - crop.y) / crop.height;
        if eyes_ratio < EYES_RATIO_HIGH {
            warnings.push("Eyes too high.".to_string());
        } else if eyes_ratio > EYES_RATIO_LOW {
            warnings.push("Eyes too low.".to_string());
        } else if eyes_ratio < EYES_BAND_MIN || eyes_ratio > EYES_BAND_MAX {
            warnings.push("Eyes outside preferred band.".to_string());
        }
    }

    let face_center_offset = (face.center_x - crop.center_x()).abs();
    if face_center_offset / crop.width > CENTER_OFFSET_MAX {
        warnings.push("Face off-center.".to_string());
    }

    if tile_height_px < MIN_TILE_HEIGHT_PX {
        warnings.push("Low resolution for ID print (tile height under 500px).".to_string());
    }

    IdWarningResult {
        warnings,
        checks_unavailable: false,
    }
}
