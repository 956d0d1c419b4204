//! Sheet compositing.
//!
//! [`render_sheet`] turns a crop rectangle plus a computed layout into a
//! bounded sequence of drawing calls against a [`DrawSurface`]: white
//! background, the same source crop blitted into every tile, and
//! optional low-opacity cut guides on top. The function itself touches
//! no pixels; the surface is the external collaborator (a browser canvas
//! in the web app, [`RasterSheet`] for native export).

mod raster;

pub use raster::RasterSheet;

use crate::geometry::Rect;
use crate::layout::LayoutResult;

/// Sheet background fill.
pub const SHEET_BACKGROUND: [u8; 3] = [255, 255, 255];
/// Cut-guide stroke color, rgba (black at 25% opacity).
pub const GUIDE_COLOR: [u8; 4] = [0, 0, 0, 64];
/// Cut-guide stroke width in pixels.
pub const GUIDE_LINE_WIDTH: f64 = 1.0;

/// A 2D raster surface the compositor draws onto.
///
/// The surface owns its bound source image; `draw_crop` scales the
/// source region into the destination with whatever filtering the
/// backend provides. All coordinates are sheet pixels.
pub trait DrawSurface {
    /// Fill an axis-aligned rectangle with an opaque color.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: [u8; 3]);

    /// Draw the `src` region of the bound source image scaled into `dest`.
    fn draw_crop(&mut self, src: &Rect, dest: &Rect);

    /// Stroke a line segment with an rgba color.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: [u8; 4], width: f64);
}

/// Composite a full sheet onto a surface.
///
/// Stateless given its inputs; safe to call again whenever the crop or
/// layout changes. The caller is responsible for supplying a surface at
/// the sheet's pixel dimensions.
pub fn render_sheet(
    surface: &mut dyn DrawSurface,
    sheet_width_px: f64,
    sheet_height_px: f64,
    crop: &Rect,
    layout: &LayoutResult,
    cut_guides: bool,
) {
    surface.fill_rect(0.0, 0.0, sheet_width_px, sheet_height_px, SHEET_BACKGROUND);

    for tile in &layout.tile_rects {
        surface.draw_crop(crop, tile);
    }

    if cut_guides {
        for line in &layout.guide_lines {
            surface.stroke_line(
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                GUIDE_COLOR,
                GUIDE_LINE_WIDTH,
            );
        }
    }
}
