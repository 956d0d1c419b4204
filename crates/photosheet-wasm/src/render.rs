//! WASM bindings for sheet rendering onto a canvas.
//!
//! The browser canvas is the drawing-surface collaborator: the core
//! compositor issues fill/blit/stroke calls and `CanvasSurface` forwards
//! them to a `CanvasRenderingContext2d`. The caller owns the canvas and
//! is responsible for the no-op case where `getContext("2d")` returned
//! nothing.

use photosheet_core::compose::{render_sheet as core_render, DrawSurface};
use photosheet_core::geometry::Rect;
use photosheet_core::LayoutResult;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, ImageBitmap};

/// A `DrawSurface` over a 2D canvas context with a bound source bitmap.
struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    image: &'a ImageBitmap,
}

impl DrawSurface for CanvasSurface<'_> {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: [u8; 3]) {
        self.ctx.set_fill_style_str(&css_rgb(color));
        self.ctx.fill_rect(x, y, width, height);
    }

    fn draw_crop(&mut self, src: &Rect, dest: &Rect) {
        // A failed blit leaves the tile blank; rendering continues.
        let _ = self
            .ctx
            .draw_image_with_image_bitmap_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                self.image,
                src.x,
                src.y,
                src.width,
                src.height,
                dest.x,
                dest.y,
                dest.width,
                dest.height,
            );
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: [u8; 4], width: f64) {
        self.ctx.set_stroke_style_str(&css_rgba(color));
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }
}

fn css_rgb(color: [u8; 3]) -> String {
    format!("rgb({}, {}, {})", color[0], color[1], color[2])
}

fn css_rgba(color: [u8; 4]) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color[0],
        color[1],
        color[2],
        color[3] as f64 / 255.0
    )
}

/// Composite the sheet onto a canvas 2D context.
///
/// Fills the sheet white, draws the same `crop` region of `image` into
/// every tile of `layout`, and strokes low-opacity cut guides when
/// `cut_guides` is set. The canvas should already be sized to the sheet
/// pixel dimensions.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const ctx = canvas.getContext("2d");
/// if (ctx) {
///   render_sheet(ctx, bitmap, crop, layout, settings.cutGuides,
///                metrics.width_px, metrics.height_px);
/// }
/// ```
#[wasm_bindgen]
pub fn render_sheet(
    ctx: &CanvasRenderingContext2d,
    image: &ImageBitmap,
    crop: JsValue,
    layout: JsValue,
    cut_guides: bool,
    sheet_width_px: f64,
    sheet_height_px: f64,
) -> Result<(), JsValue> {
    let crop: Rect = serde_wasm_bindgen::from_value(crop)?;
    let layout: LayoutResult = serde_wasm_bindgen::from_value(layout)?;
    let mut surface = CanvasSurface { ctx, image };
    core_render(
        &mut surface,
        sheet_width_px,
        sheet_height_px,
        &crop,
        &layout,
        cut_guides,
    );
    Ok(())
}
