//! User-facing sheet settings.
//!
//! The host persists these as a flat record (localStorage in the web
//! app) and merges them with defaults at startup. The core only defines
//! the record, its defaults, and the range clamps the layout engine
//! relies on as a precondition.

use serde::{Deserialize, Serialize};

use crate::{Mode, Orientation};

/// Maximum number of tile rows.
pub const MAX_ROWS: u32 = 10;
/// Maximum number of tile columns.
pub const MAX_COLUMNS: u32 = 4;

/// All user-adjustable settings for one sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    /// Print mode (friend photos or German ID).
    pub mode: Mode,
    /// Number of tile rows.
    pub rows: u32,
    /// Number of tile columns.
    pub columns: u32,
    /// Tile orientation; forced to portrait in German ID mode.
    pub orientation: Orientation,
    /// Rotate the physical paper (long edge horizontal).
    pub rotate_paper: bool,
    /// Whether the outer safe margin is applied.
    pub safe_margin_enabled: bool,
    /// Safe margin size in millimeters.
    pub safe_margin_mm: f64,
    /// Inter-tile spacing in millimeters.
    pub spacing_mm: f64,
    /// Draw cut guides between tiles.
    pub cut_guides: bool,
    /// JPEG export quality factor (0.6-1.0).
    pub quality: f32,
    /// Show the biometric overlay in German ID mode.
    pub show_id_overlay: bool,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            mode: Mode::Friend,
            rows: 5,
            columns: 2,
            orientation: Orientation::Portrait,
            rotate_paper: false,
            safe_margin_enabled: false,
            safe_margin_mm: 2.0,
            spacing_mm: 1.0,
            cut_guides: true,
            quality: 0.9,
            show_id_overlay: true,
        }
    }
}

impl SheetSettings {
    /// Clamp all fields into their valid ranges.
    ///
    /// Applied after merging persisted values with defaults, so stale or
    /// hand-edited storage can never push out-of-range values into the
    /// layout engine. German ID mode forces portrait orientation.
    pub fn normalized(mut self) -> Self {
        if self.mode == Mode::GermanId {
            self.orientation = Orientation::Portrait;
        }
        self.rows = self.rows.clamp(1, MAX_ROWS);
        self.columns = self.columns.clamp(1, MAX_COLUMNS);
        self.spacing_mm = self.spacing_mm.max(0.0);
        self.safe_margin_mm = self.safe_margin_mm.max(0.0);
        self.quality = self.quality.clamp(0.6, 1.0);
        self
    }

    /// The margin the layout engine should use: the safe margin when
    /// enabled, otherwise zero.
    pub fn margin_mm(&self) -> f64 {
        if self.safe_margin_enabled {
            self.safe_margin_mm
        } else {
            0.0
        }
    }
}
