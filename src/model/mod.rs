//! Data model types for the panel cutting calculator.

mod cost;
mod inventory;
mod job;
mod layout;
mod panel;

pub use cost::{CostInputs, CostOptions, CostResult, WasteSource};
pub use inventory::InventoryEntry;
pub use job::JobRequest;
pub use layout::LayoutResult;
pub use panel::{CutSpec, PanelSpec};
