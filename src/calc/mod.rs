//! Layout and cost calculations.

mod cost;
mod layout;

pub use cost::compute_cost;
pub use layout::compute_layout;
