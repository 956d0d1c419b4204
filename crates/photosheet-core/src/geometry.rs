//! Axis-aligned rectangle primitives.
//!
//! All crop and tile math in this crate works on `Rect` values in pixel
//! coordinates (f64, sub-pixel precision). The two operations here are
//! total: for any finite input they return a rectangle that lies fully
//! inside the given image bounds.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - x grows right, y grows down
//! - A rect bound to an image of size (W, H) satisfies
//!   `0 <= x`, `0 <= y`, `x + width <= W`, `y + height <= H`

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels (positive).
    pub width: f64,
    /// Height in pixels (positive).
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal center of the rectangle.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center of the rectangle.
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Width divided by height.
    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Whether the rectangle lies fully inside an image of the given size,
    /// allowing `tolerance` pixels of slack for floating-point rounding.
    pub fn is_within(&self, image_width: f64, image_height: f64, tolerance: f64) -> bool {
        self.x >= -tolerance
            && self.y >= -tolerance
            && self.x + self.width <= image_width + tolerance
            && self.y + self.height <= image_height + tolerance
    }
}

/// Clamp a rectangle into an image.
///
/// The rectangle is first shrunk so neither dimension exceeds the image,
/// then translated so it lies inside `[0, W - width] x [0, H - height]`.
/// Shrinking happens per-axis and does not preserve aspect ratio; callers
/// that need an aspect-correct result size the rect to fit before
/// clamping.
///
/// Never fails: the result is always fully inside the image.
pub fn clamp_rect(rect: &Rect, image_width: f64, image_height: f64) -> Rect {
    let width = rect.width.min(image_width);
    let height = rect.height.min(image_height);
    let x = rect.x.max(0.0).min(image_width - width);
    let y = rect.y.max(0.0).min(image_height - height);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// The largest rectangle of the given aspect ratio centered in the image.
///
/// Compares the image aspect against the target: a wider image constrains
/// on height, a taller image constrains on width. This is the fallback
/// crop when no face is available.
pub fn center_crop(image_width: f64, image_height: f64, aspect: f64) -> Rect {
    let image_aspect = image_width / image_height;
    let mut width = image_width;
    let mut height = image_height;
    if image_aspect > aspect {
        width = image_height * aspect;
    } else {
        height = image_width / aspect;
    }
    let x = (image_width - width) / 2.0;
    let y = (image_height - height) / 2.0;
    Rect {
        x,
        y,
        width,
        height,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for image dimensions.
    fn image_strategy() -> impl Strategy<Value = (f64, f64)> {
        (100.0f64..=6000.0, 100.0f64..=6000.0)
    }

    /// Strategy for an arbitrary (possibly out-of-bounds) rect.
    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -2000.0f64..=8000.0,
            -2000.0f64..=8000.0,
            1.0f64..=8000.0,
            1.0f64..=8000.0,
        )
            .prop_map(|(x, y, width, height)| Rect {
                x,
                y,
                width,
                height,
            })
    }

    /// Strategy for target aspect ratios covering both print modes.
    fn aspect_strategy() -> impl Strategy<Value = f64> {
        prop_oneof![
            Just(35.0 / 45.0),
            Just(2.0 / 3.0),
            Just(3.0 / 2.0),
            0.3f64..=3.0,
        ]
    }

    proptest! {
        /// Property: clamp_rect output is always inside the image.
        #[test]
        fn prop_clamp_rect_contained(
            (image_w, image_h) in image_strategy(),
            rect in rect_strategy(),
        ) {
            let result = clamp_rect(&rect, image_w, image_h);
            prop_assert!(result.is_within(image_w, image_h, 1e-9));
        }

        /// Property: clamp_rect never grows a rectangle.
        #[test]
        fn prop_clamp_rect_never_grows(
            (image_w, image_h) in image_strategy(),
            rect in rect_strategy(),
        ) {
            let result = clamp_rect(&rect, image_w, image_h);
            prop_assert!(result.width <= rect.width + 1e-9);
            prop_assert!(result.height <= rect.height + 1e-9);
        }

        /// Property: clamp_rect is idempotent.
        #[test]
        fn prop_clamp_rect_idempotent(
            (image_w, image_h) in image_strategy(),
            rect in rect_strategy(),
        ) {
            let once = clamp_rect(&rect, image_w, image_h);
            let twice = clamp_rect(&once, image_w, image_h);
            prop_assert!((once.x - twice.x).abs() < 1e-9);
            prop_assert!((once.y - twice.y).abs() < 1e-9);
            prop_assert!((once.width - twice.width).abs() < 1e-9);
            prop_assert!((once.height - twice.height).abs() < 1e-9);
        }

        /// Property: center_crop preserves the requested aspect ratio.
        #[test]
        fn prop_center_crop_aspect(
            (image_w, image_h) in image_strategy(),
            aspect in aspect_strategy(),
        ) {
            let crop = center_crop(image_w, image_h, aspect);
            prop_assert!((crop.aspect() - aspect).abs() < 1e-4);
        }

        /// Property: center_crop stays inside the image and is centered.
        #[test]
        fn prop_center_crop_contained_and_centered(
            (image_w, image_h) in image_strategy(),
            aspect in aspect_strategy(),
        ) {
            let crop = center_crop(image_w, image_h, aspect);
            prop_assert!(crop.is_within(image_w, image_h, 1e-6));
            prop_assert!((crop.center_x() - image_w / 2.0).abs() < 1e-6);
            prop_assert!((crop.center_y() - image_h / 2.0).abs() < 1e-6);
        }

        /// Property: center_crop fills the image along one axis.
        #[test]
        fn prop_center_crop_maximal(
            (image_w, image_h) in image_strategy(),
            aspect in aspect_strategy(),
        ) {
            let crop = center_crop(image_w, image_h, aspect);
            let fills_width = (crop.width - image_w).abs() < 1e-6;
            let fills_height = (crop.height - image_h).abs() < 1e-6;
            prop_assert!(fills_width || fills_height);
        }
    }
}
