//! Configuration constants and settings for the calculator.

use crate::error::{CalcError, Result};
use crate::model::CostOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Square centimetres per square metre.
pub const CM2_PER_M2: f64 = 10_000.0;

/// Square millimetres per square metre.
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// Square inches per square foot.
pub const IN2_PER_FT2: f64 = 144.0;

/// Default inventory file name.
pub const DEFAULT_STORE_FILE: &str = "inventory.json";

/// Most pieces a diagram renderer will draw.
pub const MAX_RENDERED_PIECES: u64 = 100_000;

/// Default currency symbol.
pub const DEFAULT_CURRENCY: &str = "€";

/// Unit of measurement for panel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "mm")]
    Millimeters,
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "in")]
    Inches,
}

impl Unit {
    /// Parse a unit from its short name.
    pub fn from_short_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mm" => Some(Unit::Millimeters),
            "cm" => Some(Unit::Centimeters),
            "m" => Some(Unit::Meters),
            "in" | "inch" => Some(Unit::Inches),
            _ => None,
        }
    }

    /// Divisor turning a squared length in this unit into the costing area unit.
    ///
    /// Metric units are costed per square metre, inches per square foot.
    pub fn area_divisor(&self) -> f64 {
        match self {
            Unit::Millimeters => MM2_PER_M2,
            Unit::Centimeters => CM2_PER_M2,
            Unit::Meters => 1.0,
            Unit::Inches => IN2_PER_FT2,
        }
    }

    /// Label of the costing area unit.
    pub fn area_label(&self) -> &'static str {
        match self {
            Unit::Inches => "sqft",
            _ => "sqm",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Millimeters => write!(f, "mm"),
            Unit::Centimeters => write!(f, "cm"),
            Unit::Meters => write!(f, "m"),
            Unit::Inches => write!(f, "in"),
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Unit::from_short_str(s).ok_or_else(|| format!("unknown unit '{}' (mm, cm, m, in)", s))
    }
}

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Unit the panel dimensions are given in.
    pub unit: Unit,
    /// Currency symbol printed before amounts.
    pub currency: String,
    /// Inventory file location.
    pub store_path: PathBuf,
    /// Which cost adjustments are active.
    pub options: CostOptions,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            unit: Unit::default(),
            currency: DEFAULT_CURRENCY.to_string(),
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            options: CostOptions::default(),
        }
    }
}

impl CalculatorConfig {
    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CalcError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| CalcError::InvalidFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }
}
