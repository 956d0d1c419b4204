//! Software raster surface for native sheet export.
//!
//! `RasterSheet` implements [`DrawSurface`](super::DrawSurface) over a
//! plain RGB buffer so a sheet can be composited and encoded without a
//! browser canvas. Blits use nearest-neighbor sampling, which matches
//! the print pipeline: tiles are drawn at (or above) the source crop's
//! resolution, so filtering quality is not the bottleneck.

use crate::compose::DrawSurface;
use crate::decode::DecodedImage;
use crate::geometry::Rect;

/// An in-memory RGB sheet with a bound source image.
#[derive(Debug, Clone)]
pub struct RasterSheet {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    source: DecodedImage,
}

impl RasterSheet {
    /// Create a sheet surface of the given pixel size bound to a source
    /// image. The buffer starts black; [`render_sheet`](super::render_sheet)
    /// fills the background first.
    pub fn new(width: u32, height: u32, source: DecodedImage) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; (width as usize) * (height as usize) * 3],
            source,
        }
    }

    /// Sheet width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Sheet height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The composited RGB pixel data (3 bytes per pixel, row-major).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the surface, returning the pixel buffer for encoding.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Integer pixel span covered by a coordinate range, clamped to the
    /// surface.
    fn span(start: f64, extent: f64, limit: u32) -> (u32, u32) {
        let lo = start.floor().max(0.0) as u32;
        let hi = ((start + extent).ceil().max(0.0) as u32).min(limit);
        (lo.min(limit), hi)
    }

    #[inline]
    fn put_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = ((y * self.width + x) * 3) as usize;
        self.pixels[idx] = rgb[0];
        self.pixels[idx + 1] = rgb[1];
        self.pixels[idx + 2] = rgb[2];
    }

    #[inline]
    fn blend_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = ((y * self.width + x) * 3) as usize;
        let alpha = rgba[3] as u32;
        for c in 0..3 {
            let dst = self.pixels[idx + c] as u32;
            let src = rgba[c] as u32;
            self.pixels[idx + c] = ((src * alpha + dst * (255 - alpha)) / 255) as u8;
        }
    }
}

impl DrawSurface for RasterSheet {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: [u8; 3]) {
        let (x0, x1) = Self::span(x, width, self.width);
        let (y0, y1) = Self::span(y, height, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.put_pixel(px, py, color);
            }
        }
    }

    fn draw_crop(&mut self, src: &Rect, dest: &Rect) {
        if src.width <= 0.0 || src.height <= 0.0 || dest.width <= 0.0 || dest.height <= 0.0 {
            return;
        }
        let (x0, x1) = Self::span(dest.x, dest.width, self.width);
        let (y0, y1) = Self::span(dest.y, dest.height, self.height);
        let src_max_x = self.source.width.saturating_sub(1);
        let src_max_y = self.source.height.saturating_sub(1);

        for py in y0..y1 {
            // Sample at the destination pixel center
            let v = (py as f64 + 0.5 - dest.y) / dest.height;
            let sy = (src.y + v * src.height).floor().max(0.0) as u32;
            let sy = sy.min(src_max_y);
            for px in x0..x1 {
                let u = (px as f64 + 0.5 - dest.x) / dest.width;
                let sx = (src.x + u * src.width).floor().max(0.0) as u32;
                let sx = sx.min(src_max_x);
                let src_idx = ((sy * self.source.width + sx) * 3) as usize;
                let rgb = [
                    self.source.pixels[src_idx],
                    self.source.pixels[src_idx + 1],
                    self.source.pixels[src_idx + 2],
                ];
                self.put_pixel(px, py, rgb);
            }
        }
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: [u8; 4], width: f64) {
        // Cut guides are axis-aligned; other segments are not drawn.
        let half = width / 2.0;
        if y1 == y2 {
            let (px0, px1) = Self::span(x1.min(x2), (x2 - x1).abs(), self.width);
            let (py0, py1) = Self::span(y1 - half, width.max(1.0), self.height);
            for py in py0..py1 {
                for px in px0..px1 {
                    self.blend_pixel(px, py, color);
                }
            }
        } else if x1 == x2 {
            let (py0, py1) = Self::span(y1.min(y2), (y2 - y1).abs(), self.height);
            let (px0, px1) = Self::span(x1 - half, width.max(1.0), self.width);
            for py in py0..py1 {
                for px in px0..px1 {
                    self.blend_pixel(px, py, color);
                }
            }
        }
    }
}
