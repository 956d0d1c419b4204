//! Automatic crop derivation from a detected face.

use crate::face::FaceBox;
use crate::geometry::{center_crop, clamp_rect, Rect};
use crate::Mode;

/// Fraction of the crop height the head should occupy in friend mode.
const FRIEND_HEAD_RATIO: f64 = 0.60;
/// Fraction of the crop height the head should occupy for German ID
/// photos (documented biometric target).
const GERMAN_HEAD_RATIO: f64 = 0.70;

/// Fraction of the crop height, from the top, where the eye line should
/// land in friend mode (rule-of-thirds style framing).
const FRIEND_EYE_TARGET: f64 = 0.38;
/// Eye-line target for German ID photos.
const GERMAN_EYE_TARGET: f64 = 0.40;

/// Policy inputs for [`auto_crop_from_face`].
#[derive(Debug, Clone, Copy)]
pub struct AutoCropOptions {
    /// Print mode; selects head-ratio and eye-line targets.
    pub mode: Mode,
    /// Target crop aspect ratio (width / height).
    pub aspect: f64,
}

/// Derive an initial crop rectangle for a source image.
///
/// Without a face this is just the largest centered rectangle of the
/// target aspect. With a face, the crop is sized so the face occupies
/// the mode's head-ratio fraction of the crop height, centered
/// horizontally on the face, and positioned vertically so the eye line
/// lands at the mode's target fraction from the top.
///
/// If the ideal crop would exceed the image in either dimension, both
/// dimensions are scaled down by the same factor so the aspect ratio is
/// preserved exactly, then the result is clamped into the image.
pub fn auto_crop_from_face(
    image_width: f64,
    image_height: f64,
    face: Option<&FaceBox>,
    options: AutoCropOptions,
) -> Rect {
    let Some(face) = face else {
        return center_crop(image_width, image_height, options.aspect);
    };

    let head_ratio = match options.mode {
        Mode::GermanId => GERMAN_HEAD_RATIO,
        Mode::Friend => FRIEND_HEAD_RATIO,
    };
    let mut crop_height = face.height / head_ratio;
    let mut crop_width = crop_height * options.aspect;

    // Uniform downscale keeps the aspect exact even when the ideal crop
    // is larger than the image.
    let max_scale = (image_width / crop_width)
        .min(image_height / crop_height)
        .min(1.0);
    crop_width *= max_scale;
    crop_height *= max_scale;

    let eyes_y = face.eyes_y_or_estimate();
    let eye_target = match options.mode {
        Mode::GermanId => GERMAN_EYE_TARGET,
        Mode::Friend => FRIEND_EYE_TARGET,
    };
    let crop_x = face.center_x - crop_width / 2.0;
    let crop_y = eyes_y - crop_height * eye_target;

    clamp_rect(
        &Rect::new(crop_x, crop_y, crop_width, crop_height),
        image_width,
        image_height,
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn image_strategy() -> impl Strategy<Value = (f64, f64)> {
        (400.0f64..=6000.0, 400.0f64..=6000.0)
    }

    fn mode_strategy() -> impl Strategy<Value = Mode> {
        prop_oneof![Just(Mode::Friend), Just(Mode::GermanId)]
    }

    /// Face position and size as fractions of the image.
    fn face_fraction_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
        (0.0f64..=0.7, 0.0f64..=0.7, 0.05f64..=0.3, 0.05f64..=0.3)
    }

    fn face_in_image(image_w: f64, image_h: f64, fractions: (f64, f64, f64, f64)) -> FaceBox {
        let (fx, fy, fw, fh) = fractions;
        let x = fx * image_w;
        let y = fy * image_h;
        let width = fw * image_w;
        let height = fh * image_h;
        FaceBox {
            id: "face-0".to_string(),
            x,
            y,
            width,
            height,
            center_x: x + width / 2.0,
            center_y: y + height / 2.0,
            eyes_y: None,
            score: None,
        }
    }

    proptest! {
        /// Property: the derived crop is contained and aspect-correct.
        #[test]
        fn prop_auto_crop_contained_and_aspect_correct(
            (image_w, image_h) in image_strategy(),
            fractions in face_fraction_strategy(),
            mode in mode_strategy(),
            aspect in 0.5f64..=2.0,
        ) {
            let options = AutoCropOptions { mode, aspect };
            let face = face_in_image(image_w, image_h, fractions);
            let crop = auto_crop_from_face(image_w, image_h, Some(&face), options);
            prop_assert!(crop.is_within(image_w, image_h, 1e-6));
            prop_assert!((crop.aspect() - aspect).abs() < 1e-4);
        }

        /// Property: without a face the result equals center_crop.
        #[test]
        fn prop_no_face_is_center_crop(
            (image_w, image_h) in image_strategy(),
            mode in mode_strategy(),
            aspect in 0.5f64..=2.0,
        ) {
            let crop = auto_crop_from_face(
                image_w,
                image_h,
                None,
                AutoCropOptions { mode, aspect },
            );
            let expected = center_crop(image_w, image_h, aspect);
            prop_assert_eq!(crop, expected);
        }
    }
}
