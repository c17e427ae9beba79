//! Panel dimensions - the main sheet and the piece cut from it.

use serde::{Deserialize, Serialize};

/// Main sheet being subdivided.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Sheet width.
    pub width: f64,
    /// Sheet height.
    pub height: f64,
}

impl PanelSpec {
    /// Create a new main panel.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area in squared input units.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Get display dimensions (width x height).
    pub fn dimensions_string(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }
}

/// Target rectangle produced from the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CutSpec {
    /// Piece width.
    pub width: f64,
    /// Piece height.
    pub height: f64,
}

impl CutSpec {
    /// Create a new cut panel.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area in squared input units.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Get display dimensions (width x height).
    pub fn dimensions_string(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }

    /// Check whether the piece fits the panel at least once in this orientation.
    pub fn fits_within(&self, panel: &PanelSpec) -> bool {
        self.width <= panel.width && self.height <= panel.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas() {
        assert_eq!(PanelSpec::new(100.0, 50.0).area(), 5000.0);
        assert_eq!(CutSpec::new(30.0, 20.0).area(), 600.0);
    }

    #[test]
    fn test_dimensions_string() {
        assert_eq!(PanelSpec::new(244.0, 122.0).dimensions_string(), "244 x 122");
        assert_eq!(CutSpec::new(30.5, 20.0).dimensions_string(), "30.5 x 20");
    }

    #[test]
    fn test_fits_within() {
        let panel = PanelSpec::new(100.0, 100.0);
        assert!(CutSpec::new(100.0, 100.0).fits_within(&panel));
        assert!(CutSpec::new(30.0, 99.0).fits_within(&panel));
        assert!(!CutSpec::new(101.0, 10.0).fits_within(&panel));
        assert!(!CutSpec::new(10.0, 100.5).fits_within(&panel));
    }
}
