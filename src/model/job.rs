//! Job request - everything the user enters for one calculation.

use super::{CostInputs, CutSpec, PanelSpec};
use serde::{Deserialize, Serialize};

/// One calculation request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobRequest {
    /// Panel/job name.
    #[serde(default)]
    pub name: String,
    /// Job date; today when empty.
    #[serde(default)]
    pub date: String,
    /// Main panel.
    pub main: PanelSpec,
    /// Cut panel.
    pub cut: CutSpec,
    /// Cost figures.
    #[serde(default)]
    pub costs: CostInputs,
    /// Cutting waste entered directly, replacing the layout-derived value.
    #[serde(default)]
    pub cutting_waste_percent: Option<f64>,
}

impl JobRequest {
    /// Create a request for the given geometry with default costs.
    pub fn new(name: impl Into<String>, main: PanelSpec, cut: CutSpec) -> Self {
        Self {
            name: name.into(),
            main,
            cut,
            ..Default::default()
        }
    }

    /// Set the cost figures.
    pub fn with_costs(mut self, costs: CostInputs) -> Self {
        self.costs = costs;
        self
    }

    /// Set the job date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set a user-supplied cutting waste percentage.
    pub fn with_cutting_waste(mut self, percent: f64) -> Self {
        self.cutting_waste_percent = Some(percent);
        self
    }
}
