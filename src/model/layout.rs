//! Grid layout result for one main panel.

use serde::{Deserialize, Serialize};

/// Outcome of tiling one cut size over the main panel in a fixed orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Pieces along the panel width.
    pub per_row: u64,
    /// Pieces along the panel height.
    pub per_column: u64,
    /// Pieces per main panel (per_row x per_column).
    pub total_pieces: u64,
    /// Width of the strip left on the right edge.
    pub leftover_width: f64,
    /// Height of the strip left on the bottom edge.
    pub leftover_height: f64,
    /// Area not covered by any whole piece.
    pub leftover_area: f64,
    /// Leftover area as a percentage of the panel area.
    pub waste_percent: f64,
}

impl LayoutResult {
    /// Width covered by whole pieces.
    pub fn used_width(&self, cut_width: f64) -> f64 {
        self.per_row as f64 * cut_width
    }

    /// Height covered by whole pieces.
    pub fn used_height(&self, cut_height: f64) -> f64 {
        self.per_column as f64 * cut_height
    }
}
