//! Detected face data and face selection.
//!
//! The detection model itself lives outside this crate (a MediaPipe-style
//! detector in the browser, or any other backend). The core only defines
//! the data it expects back, the seam to call through, and the heuristic
//! for picking one face when the detector returns several.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodedImage;

/// Fraction of the face box height at which the eye line is assumed to sit
/// when the detector did not report eye landmarks.
pub const EYE_ESTIMATE_RATIO: f64 = 0.35;

/// Weight of the distance-to-image-center penalty when ranking faces.
const CENTER_DISTANCE_WEIGHT: f64 = 50.0;

/// Errors from the external face detector.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The detector backend is not available (model not loaded, etc.).
    #[error("Face detector unavailable: {0}")]
    Unavailable(String),

    /// Detection ran but failed on this image.
    #[error("Face detection failed: {0}")]
    DetectionFailed(String),
}

/// A face detected in the source image, in image pixel coordinates.
///
/// Produced once per uploaded image and immutable afterwards. `eyes_y` is
/// only present when the detector reported eye landmarks; use
/// [`FaceBox::eyes_y_or_estimate`] when a value is always needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceBox {
    /// Stable identifier, unique within one detection pass.
    pub id: String,
    /// Left edge of the bounding box.
    pub x: f64,
    /// Top edge of the bounding box.
    pub y: f64,
    /// Bounding box width.
    pub width: f64,
    /// Bounding box height.
    pub height: f64,
    /// Horizontal center of the bounding box.
    pub center_x: f64,
    /// Vertical center of the bounding box.
    pub center_y: f64,
    /// Average y coordinate of the two eyes, if landmarks were reported.
    pub eyes_y: Option<f64>,
    /// Detector confidence, if reported.
    pub score: Option<f32>,
}

impl FaceBox {
    /// The eye-line y coordinate: the explicit landmark when present,
    /// otherwise estimated at a fixed fraction below the box top.
    pub fn eyes_y_or_estimate(&self) -> f64 {
        self.eyes_y
            .unwrap_or(self.y + self.height * EYE_ESTIMATE_RATIO)
    }
}

/// The external face-detection seam.
///
/// Any failure is treated as "no face" by callers; the auto-crop falls
/// back to a centered crop and biometric checks report unavailable.
pub trait FaceDetector {
    /// Detect faces in a decoded image. May return an empty list.
    fn detect(&self, image: &DecodedImage) -> Result<Vec<FaceBox>, DetectError>;
}

/// Pick the most likely subject from a set of detected faces.
///
/// Ranks by bounding-box area minus a penalty proportional to the distance
/// from the image center, so a large off-center face can still beat a
/// small centered one. Returns `None` for an empty list.
pub fn select_best_face(
    faces: &[FaceBox],
    image_width: f64,
    image_height: f64,
) -> Option<&FaceBox> {
    let center_x = image_width / 2.0;
    let center_y = image_height / 2.0;
    faces.iter().max_by(|a, b| {
        let score_a = face_score(a, center_x, center_y);
        let score_b = face_score(b, center_x, center_y);
        score_a
            .partial_cmp(&score_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

fn face_score(face: &FaceBox, center_x: f64, center_y: f64) -> f64 {
    let area = face.width * face.height;
    let dist = (face.center_x - center_x).hypot(face.center_y - center_y);
    area - dist * CENTER_DISTANCE_WEIGHT
}
