//! Input validation for calculation jobs.

mod validate;

pub use validate::{validate_costs, validate_dimensions, validate_job, ValidationResult};
