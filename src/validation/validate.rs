//! Validation logic for calculation jobs.

use crate::config::float_cmp;
use crate::error::{CalcError, Result};
use crate::model::JobRequest;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// Turn a failed result into an error.
    pub fn into_result(self) -> Result<Self> {
        if self.passed {
            Ok(self)
        } else {
            Err(CalcError::ValidationFailed {
                messages: self.errors,
            })
        }
    }
}

/// Validate all inputs of a job.
pub fn validate_job(job: &JobRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if job.name.trim().is_empty() {
        result.add_warning("Panel name is empty");
    }

    result.merge(validate_dimensions(job));
    result.merge(validate_costs(job));

    result
}

/// Validate main and cut panel geometry.
pub fn validate_dimensions(job: &JobRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let dims = [
        ("Main panel width", job.main.width),
        ("Main panel height", job.main.height),
        ("Cut panel width", job.cut.width),
        ("Cut panel height", job.cut.height),
    ];
    for (label, value) in dims {
        if !value.is_finite() || value <= 0.0 {
            result.add_error(format!("{}: Invalid dimension ({})", label, value));
        }
    }

    if !result.passed {
        return result;
    }

    if !job.cut.fits_within(&job.main) {
        result.add_warning(format!(
            "Cut panel {} does not fit main panel {}: no pieces fit",
            job.cut.dimensions_string(),
            job.main.dimensions_string()
        ));
    }

    result
}

/// Validate quantities, prices and percentages.
pub fn validate_costs(job: &JobRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let costs = &job.costs;

    if costs.quantity == 0 {
        result.add_error("Quantity of main panels must be at least 1");
    }

    if !costs.cost_per_area.is_finite() || costs.cost_per_area < 0.0 {
        result.add_error(format!(
            "Cost per area must not be negative ({})",
            costs.cost_per_area
        ));
    }

    if !costs.additional_cost.is_finite() || costs.additional_cost < 0.0 {
        result.add_error(format!(
            "Additional cost must not be negative ({})",
            costs.additional_cost
        ));
    }

    if !(0.0..=100.0).contains(&costs.discard_percent) {
        result.add_error(format!(
            "Discard percentage must be between 0 and 100 ({})",
            costs.discard_percent
        ));
    } else if float_cmp::approx_eq(costs.discard_percent, 100.0) {
        result.add_warning("Discard percentage is 100%: no good pieces remain");
    }

    if let Some(waste) = job.cutting_waste_percent {
        if !(0.0..100.0).contains(&waste) {
            result.add_error(format!(
                "Cutting waste percentage must be at least 0 and below 100 ({})",
                waste
            ));
        }
    }

    result
}
