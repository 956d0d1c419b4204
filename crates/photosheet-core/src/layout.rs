//! Sheet layout: tile grid and cut-guide computation.
//!
//! The output sheet is a fixed physical print profile (10x15 cm at
//! 20 px/mm, so 2000x3000 px) onto which a grid of identical tiles is
//! placed. Layout is a pure function of its inputs and is recomputed
//! whenever a grid setting changes; results are never cached or mutated.
//!
//! Tiles are emitted in row-major order (row 0 first, columns left to
//! right), which consumers rely on when indexing tiles by position.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Long edge of the fixed print profile, in pixels.
const BASE_LONG_EDGE_PX: f64 = 3000.0;
/// Short edge of the fixed print profile, in pixels.
const BASE_SHORT_EDGE_PX: f64 = 2000.0;
/// Long edge of the fixed print profile, in millimeters (15 cm).
const BASE_LONG_EDGE_MM: f64 = 150.0;

/// Pixel dimensions and density of the physical print sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetMetrics {
    /// Sheet width in pixels.
    pub width_px: f64,
    /// Sheet height in pixels.
    pub height_px: f64,
    /// Print density in pixels per millimeter.
    pub px_per_mm: f64,
}

/// Metrics for the fixed print profile, with the paper optionally rotated
/// (long edge horizontal instead of vertical).
pub fn sheet_metrics(rotate_paper: bool) -> SheetMetrics {
    let (width_px, height_px) = if rotate_paper {
        (BASE_LONG_EDGE_PX, BASE_SHORT_EDGE_PX)
    } else {
        (BASE_SHORT_EDGE_PX, BASE_LONG_EDGE_PX)
    };
    SheetMetrics {
        width_px,
        height_px,
        px_per_mm: BASE_LONG_EDGE_PX / BASE_LONG_EDGE_MM,
    }
}

/// A cut-guide line segment in sheet pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Inputs to [`compute_layout`].
///
/// Rows, columns, spacing and margin are assumed pre-clamped at the
/// settings boundary (`rows` 1-10, `columns` 1-4, spacing/margin >= 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Sheet width in pixels.
    pub sheet_width_px: f64,
    /// Sheet height in pixels.
    pub sheet_height_px: f64,
    /// Number of tile rows.
    pub rows: u32,
    /// Number of tile columns.
    pub columns: u32,
    /// Gap between adjacent cells, in millimeters.
    pub spacing_mm: f64,
    /// Outer margin on all four sides, in millimeters.
    pub margin_mm: f64,
    /// Print density in pixels per millimeter.
    pub px_per_mm: f64,
    /// Tile aspect ratio (width / height).
    pub tile_aspect: f64,
}

/// A computed sheet layout.
///
/// Derived data only; recomputed from [`LayoutParams`] on every relevant
/// input change with no hidden state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Tile placement rectangles in row-major order.
    pub tile_rects: Vec<Rect>,
    /// Width of each tile in pixels.
    pub tile_width: f64,
    /// Height of each tile in pixels.
    pub tile_height: f64,
    /// Width of each grid cell in pixels.
    pub cell_width: f64,
    /// Height of each grid cell in pixels.
    pub cell_height: f64,
    /// Inter-cell spacing in pixels.
    pub spacing_px: f64,
    /// Outer margin in pixels.
    pub margin_px: f64,
    /// Cut-guide segments, row boundaries first, then column boundaries.
    pub guide_lines: Vec<GuideLine>,
}

/// Compute tile placements and cut guides for a sheet.
///
/// The usable area is the sheet minus two margins and the inter-cell
/// gaps, floored at 1 px per axis so extreme settings cannot produce a
/// non-positive cell. Each tile is the largest rectangle of the target
/// aspect that fits its cell, centered within the cell, so tiles never
/// overlap neighboring cells however the cell and tile aspects disagree.
///
/// Guides sit at the midpoint of each inter-cell gap: a physical cut
/// along a guide trims equal spacing from both neighboring tiles. They
/// span from the margin to the opposite margin.
pub fn compute_layout(params: &LayoutParams) -> LayoutResult {
    let LayoutParams {
        sheet_width_px,
        sheet_height_px,
        rows,
        columns,
        spacing_mm,
        margin_mm,
        px_per_mm,
        tile_aspect,
    } = *params;
    let rows = rows.max(1);
    let columns = columns.max(1);

    let spacing_px = spacing_mm.max(0.0) * px_per_mm;
    let margin_px = margin_mm.max(0.0) * px_per_mm;
    let usable_width =
        (sheet_width_px - margin_px * 2.0 - (columns - 1) as f64 * spacing_px).max(1.0);
    let usable_height =
        (sheet_height_px - margin_px * 2.0 - (rows - 1) as f64 * spacing_px).max(1.0);

    let cell_width = usable_width / columns as f64;
    let cell_height = usable_height / rows as f64;

    let tile_width = cell_width.min(cell_height * tile_aspect);
    let tile_height = tile_width / tile_aspect;

    let mut tile_rects = Vec::with_capacity((rows * columns) as usize);
    for row in 0..rows {
        for col in 0..columns {
            let cell_x = margin_px + col as f64 * (cell_width + spacing_px);
            let cell_y = margin_px + row as f64 * (cell_height + spacing_px);
            tile_rects.push(Rect {
                x: cell_x + (cell_width - tile_width) / 2.0,
                y: cell_y + (cell_height - tile_height) / 2.0,
                width: tile_width,
                height: tile_height,
            });
        }
    }

    let mut guide_lines = Vec::new();
    for row in 1..rows {
        let line_y =
            margin_px + row as f64 * cell_height + (row - 1) as f64 * spacing_px + spacing_px / 2.0;
        guide_lines.push(GuideLine {
            x1: margin_px,
            y1: line_y,
            x2: sheet_width_px - margin_px,
            y2: line_y,
        });
    }
    for col in 1..columns {
        let line_x =
            margin_px + col as f64 * cell_width + (col - 1) as f64 * spacing_px + spacing_px / 2.0;
        guide_lines.push(GuideLine {
            x1: line_x,
            y1: margin_px,
            x2: line_x,
            y2: sheet_height_px - margin_px,
        });
    }

    LayoutResult {
        tile_rects,
        tile_width,
        tile_height,
        cell_width,
        cell_height,
        spacing_px,
        margin_px,
        guide_lines,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
