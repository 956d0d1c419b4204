//! Interactive crop adjustment: drag and zoom.

use crate::geometry::{clamp_rect, Rect};

/// Lower bound for the zoom factor (zooming out).
pub const MIN_ZOOM: f64 = 0.4;
/// Upper bound for the zoom factor (zooming in).
pub const MAX_ZOOM: f64 = 2.0;

/// Absolute minimum crop width in pixels.
const MIN_CROP_WIDTH_PX: f64 = 40.0;
/// Minimum crop width as a fraction of the image width.
const MIN_CROP_WIDTH_FRACTION: f64 = 0.1;

/// Translate a crop rectangle by a drag delta and clamp it back into the
/// image. The size is never altered by a move.
pub fn move_crop(
    rect: &Rect,
    delta_x: f64,
    delta_y: f64,
    image_width: f64,
    image_height: f64,
) -> Rect {
    clamp_rect(
        &Rect::new(rect.x + delta_x, rect.y + delta_y, rect.width, rect.height),
        image_width,
        image_height,
    )
}

/// Resize a crop rectangle about its center by a zoom factor.
///
/// The factor is clamped to `[MIN_ZOOM, MAX_ZOOM]`; a factor above 1
/// shrinks the crop (zooming the subject in). The new width is the old
/// width divided by the factor and the height always follows from the
/// aspect, so the result never drifts off-ratio.
///
/// Two floors apply after the division:
/// - a minimum width of `max(40, image_width * 0.1)` keeps the crop usable
/// - if the requested size exceeds the image in either dimension, the
///   size resets to the largest aspect-correct rectangle that fits
///
/// The result is recentered on the input's center and clamped into the
/// image. With a factor of 1 and an already-valid rect this is an
/// identity up to floating-point rounding.
pub fn zoom_crop(
    rect: &Rect,
    zoom_factor: f64,
    image_width: f64,
    image_height: f64,
    aspect: f64,
) -> Rect {
    let clamped_zoom = zoom_factor.clamp(MIN_ZOOM, MAX_ZOOM);
    let center_x = rect.center_x();
    let center_y = rect.center_y();
    let mut new_width = rect.width / clamped_zoom;
    let mut new_height = new_width / aspect;

    let min_width = MIN_CROP_WIDTH_PX.max(image_width * MIN_CROP_WIDTH_FRACTION);
    if new_width < min_width {
        new_width = min_width;
        new_height = new_width / aspect;
    }

    if new_width > image_width || new_height > image_height {
        new_width = image_width.min(image_height * aspect);
        new_height = new_width / aspect;
    }

    clamp_rect(
        &Rect::new(
            center_x - new_width / 2.0,
            center_y - new_height / 2.0,
            new_width,
            new_height,
        ),
        image_width,
        image_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_translates() {
        let rect = Rect::new(100.0, 100.0, 200.0, 300.0);
        let moved = move_crop(&rect, 50.0, -30.0, 1000.0, 1000.0);
        assert_eq!(moved.x, 150.0);
        assert_eq!(moved.y, 70.0);
        assert_eq!(moved.width, 200.0);
        assert_eq!(moved.height, 300.0);
    }

    #[test]
    fn test_move_clamps_at_edges() {
        let rect = Rect::new(100.0, 100.0, 200.0, 300.0);
        let moved = move_crop(&rect, -500.0, 5000.0, 1000.0, 1000.0);
        assert_eq!(moved.x, 0.0);
        assert_eq!(moved.y, 700.0);
        assert_eq!(moved.width, 200.0);
        assert_eq!(moved.height, 300.0);
    }

    #[test]
    fn test_zoom_in_shrinks_crop() {
        let aspect = 2.0 / 3.0;
        let rect = Rect::new(200.0, 200.0, 600.0, 900.0);
        let zoomed = zoom_crop(&rect, 2.0, 2000.0, 3000.0, aspect);
        assert!((zoomed.width - 300.0).abs() < 1e-9);
        assert!((zoomed.height - 450.0).abs() < 1e-9);
        // Center preserved
        assert!((zoomed.center_x() - rect.center_x()).abs() < 1e-9);
        assert!((zoomed.center_y() - rect.center_y()).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_factor_clamped() {
        let aspect = 2.0 / 3.0;
        let rect = Rect::new(200.0, 200.0, 600.0, 900.0);
        // Factor 10 behaves like factor 2
        let zoomed = zoom_crop(&rect, 10.0, 2000.0, 3000.0, aspect);
        assert!((zoomed.width - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_respects_min_width_floor() {
        let aspect = 2.0 / 3.0;
        let rect = Rect::new(0.0, 0.0, 300.0, 450.0);
        // Zooming in on an already small crop hits the floor:
        // max(40, 2000 * 0.1) = 200
        let zoomed = zoom_crop(&rect, 2.0, 2000.0, 3000.0, aspect);
        assert!((zoomed.width - 200.0).abs() < 1e-9);
        assert!((zoomed.height - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_out_past_image_resets_to_largest_fit() {
        let aspect = 2.0 / 3.0;
        let rect = Rect::new(0.0, 0.0, 1800.0, 2700.0);
        // Zooming out would request 4500x6750, larger than the image
        let zoomed = zoom_crop(&rect, 0.4, 2000.0, 3000.0, aspect);
        assert!((zoomed.width - 2000.0).abs() < 1e-9);
        assert!((zoomed.height - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_identity_at_factor_one() {
        let aspect = 2.0 / 3.0;
        let rect = Rect::new(250.0, 400.0, 600.0, 900.0);
        let zoomed = zoom_crop(&rect, 1.0, 2000.0, 3000.0, aspect);
        assert!((zoomed.x - rect.x).abs() < 1e-6);
        assert!((zoomed.y - rect.y).abs() < 1e-6);
        assert!((zoomed.width - rect.width).abs() < 1e-6);
        assert!((zoomed.height - rect.height).abs() < 1e-6);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
