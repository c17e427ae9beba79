//! Cost inputs, options and results.

use serde::{Deserialize, Serialize};

/// Material and quantity figures for one job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Number of main panels cut.
    pub quantity: u32,
    /// Material cost per area unit (sqm or sqft).
    pub cost_per_area: f64,
    /// Fixed extra cost for the whole job (transport, handling).
    pub additional_cost: f64,
    /// Share of produced pieces rejected for defects, 0-100.
    pub discard_percent: f64,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            quantity: 1,
            cost_per_area: 0.0,
            additional_cost: 0.0,
            discard_percent: 0.0,
        }
    }
}

/// Where the cutting waste percentage comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteSource {
    /// Use the leftover share computed by the layout.
    #[default]
    DerivedFromLayout,
    /// Use a percentage entered by the user, ignoring the layout.
    UserSupplied(f64),
}

/// Which cost adjustments are active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostOptions {
    /// Reduce good pieces by the discard percentage.
    pub apply_discard: bool,
    /// Inflate the cost by the cutting waste percentage.
    pub apply_cutting_waste: bool,
    /// Source of the cutting waste percentage.
    pub cutting_waste_source: WasteSource,
}

impl Default for CostOptions {
    fn default() -> Self {
        Self {
            apply_discard: true,
            apply_cutting_waste: true,
            cutting_waste_source: WasteSource::DerivedFromLayout,
        }
    }
}

impl CostOptions {
    /// Options with the given waste source and both adjustments active.
    pub fn with_waste_source(source: WasteSource) -> Self {
        Self {
            cutting_waste_source: source,
            ..Default::default()
        }
    }
}

/// Derived job totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostResult {
    /// Pieces cut from all main panels, before discard.
    pub total_pieces: u64,
    /// Pieces surviving the discard filter (fractional).
    pub good_pieces: f64,
    /// Area of one main panel.
    pub main_panel_area: f64,
    /// Area of all main panels.
    pub total_main_panel_area: f64,
    /// Main panel area net of cutting waste.
    pub effective_main_panel_area: f64,
    /// Cutting waste percentage that was applied.
    pub cutting_waste_percent: f64,
    /// Material plus additional cost.
    pub base_cost: f64,
    /// Base cost inflated for cutting waste.
    pub adjusted_cost: f64,
    /// Adjusted cost spread over the good pieces.
    pub cost_per_good_piece: f64,
    /// Area of one cut piece.
    pub cut_panel_area: f64,
    /// Cost per good piece divided by its area.
    pub cost_per_area_of_cut_piece: f64,
}

impl CostResult {
    /// Whole good pieces, truncating the fractional remainder.
    pub fn whole_good_pieces(&self) -> u64 {
        self.good_pieces.max(0.0).floor() as u64
    }
}
