//! Inventory entry - snapshot of one completed job.

use crate::config::Unit;
use serde::{Deserialize, Serialize};

/// One line of the job inventory. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Panel/job name.
    pub name: String,
    /// Job date (ISO 8601).
    pub date: String,
    /// Main and cut dimensions, e.g. "100 x 100 cm -> 30 x 30 cm".
    pub dimensions: String,
    /// Unit the dimensions were entered in.
    #[serde(default)]
    pub unit: Unit,
    /// Number of main panels.
    pub quantity: u32,
    /// Material cost per area unit of `unit`.
    pub cost_per_area: f64,
    /// Adjusted total cost.
    pub total_cost: f64,
    /// Pieces before discard.
    pub total_pieces: u64,
    /// Whole pieces after discard.
    pub good_pieces: u64,
}

impl InventoryEntry {
    /// Check that every amount can be written to and read back from JSON.
    pub fn has_finite_amounts(&self) -> bool {
        self.cost_per_area.is_finite() && self.total_cost.is_finite()
    }
}
