//! Geometric model of the cutting diagram.
//!
//! Coordinates have their origin at the corner the grid is tiled from, with X
//! growing to the right and Y growing towards the bottom edge.

use crate::config::MAX_RENDERED_PIECES;
use crate::error::{CalcError, Result};
use crate::model::{CutSpec, LayoutResult, PanelSpec};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge Y coordinate.
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Sheet outline, piece grid and leftover strips of one main panel.
///
/// The grid is kept as counts and pitch; piece rectangles are produced on
/// demand by [`Diagram::pieces`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagram {
    /// Main panel outline.
    pub sheet: Rect,
    /// Grid pitch along X (cut width).
    pub pitch_x: f64,
    /// Grid pitch along Y (cut height).
    pub pitch_y: f64,
    /// Pieces along X.
    pub columns: u64,
    /// Pieces along Y.
    pub rows: u64,
    /// Strip along the right edge, full sheet height.
    pub right_strip: Option<Rect>,
    /// Strip along the bottom edge, below the pieces only.
    pub bottom_strip: Option<Rect>,
}

impl Diagram {
    /// Number of pieces in the grid.
    pub fn piece_count(&self) -> u64 {
        self.columns.saturating_mul(self.rows)
    }

    /// Piece rectangles, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |col| {
                Rect::new(
                    col as f64 * self.pitch_x,
                    row as f64 * self.pitch_y,
                    self.pitch_x,
                    self.pitch_y,
                )
            })
        })
    }

    /// Width covered by the pieces.
    pub fn used_width(&self) -> f64 {
        self.columns as f64 * self.pitch_x
    }

    /// Height covered by the pieces.
    pub fn used_height(&self) -> f64 {
        self.rows as f64 * self.pitch_y
    }

    /// Leftover strips that are present.
    pub fn waste_strips(&self) -> impl Iterator<Item = &Rect> {
        self.right_strip.iter().chain(self.bottom_strip.iter())
    }

    /// Total area of the leftover strips.
    pub fn waste_area(&self) -> f64 {
        self.waste_strips().map(Rect::area).sum()
    }

    /// Total area of the pieces.
    pub fn piece_area(&self) -> f64 {
        self.piece_count() as f64 * self.pitch_x * self.pitch_y
    }

    /// Fail when the grid has too many pieces or lines to draw.
    pub fn check_drawable(&self) -> Result<()> {
        let pieces = self.piece_count();
        if pieces > MAX_RENDERED_PIECES
            || self.columns > MAX_RENDERED_PIECES
            || self.rows > MAX_RENDERED_PIECES
        {
            return Err(CalcError::GridTooLarge {
                pieces,
                limit: MAX_RENDERED_PIECES,
            });
        }
        Ok(())
    }
}

/// Lay out the diagram for a computed grid.
///
/// The bottom strip stops where the right strip starts, so the two strips never
/// overlap and their areas add up to the layout's leftover area.
pub fn build_diagram(main: &PanelSpec, cut: &CutSpec, layout: &LayoutResult) -> Diagram {
    let used_width = layout.used_width(cut.width);
    let used_height = layout.used_height(cut.height);

    let right_strip = (layout.leftover_width > 0.0)
        .then(|| Rect::new(used_width, 0.0, layout.leftover_width, main.height));

    let bottom_strip = (layout.leftover_height > 0.0 && used_width > 0.0)
        .then(|| Rect::new(0.0, used_height, used_width, layout.leftover_height));

    Diagram {
        sheet: Rect::new(0.0, 0.0, main.width, main.height),
        pitch_x: cut.width,
        pitch_y: cut.height,
        columns: layout.per_row,
        rows: layout.per_column,
        right_strip,
        bottom_strip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::compute_layout;
    use crate::config::float_cmp::approx_eq;

    fn diagram(mw: f64, mh: f64, cw: f64, ch: f64) -> (Diagram, LayoutResult) {
        let main = PanelSpec::new(mw, mh);
        let cut = CutSpec::new(cw, ch);
        let layout = compute_layout(&main, &cut);
        (build_diagram(&main, &cut, &layout), layout)
    }

    #[test]
    fn test_square_grid() {
        let (d, _) = diagram(100.0, 100.0, 30.0, 30.0);
        let pieces: Vec<Rect> = d.pieces().collect();
        assert_eq!(d.piece_count(), 9);
        assert_eq!(pieces.len(), 9);
        assert_eq!(pieces[0], Rect::new(0.0, 0.0, 30.0, 30.0));
        assert_eq!(pieces[1], Rect::new(30.0, 0.0, 30.0, 30.0));
        assert_eq!(pieces[3], Rect::new(0.0, 30.0, 30.0, 30.0));
        assert_eq!(d.right_strip, Some(Rect::new(90.0, 0.0, 10.0, 100.0)));
        assert_eq!(d.bottom_strip, Some(Rect::new(0.0, 90.0, 90.0, 10.0)));
    }

    #[test]
    fn test_strip_areas_sum_to_leftover() {
        for (mw, mh, cw, ch) in [
            (100.0, 100.0, 30.0, 30.0),
            (244.0, 122.0, 60.0, 40.0),
            (305.0, 183.0, 47.5, 21.0),
            (100.0, 50.0, 120.0, 10.0),
        ] {
            let (d, layout) = diagram(mw, mh, cw, ch);
            assert!(approx_eq(d.waste_area(), layout.leftover_area));
            assert!(approx_eq(d.waste_area() + d.piece_area(), mw * mh));
        }
    }

    #[test]
    fn test_exact_fit_has_no_strips() {
        let (d, _) = diagram(120.0, 80.0, 40.0, 20.0);
        assert_eq!(d.pieces().count(), 12);
        assert!(d.right_strip.is_none());
        assert!(d.bottom_strip.is_none());
        assert_eq!(d.waste_strips().count(), 0);
    }

    #[test]
    fn test_only_right_strip() {
        let (d, _) = diagram(100.0, 90.0, 30.0, 30.0);
        assert!(d.right_strip.is_some());
        assert!(d.bottom_strip.is_none());
    }

    #[test]
    fn test_oversized_cut_is_all_waste() {
        let (d, _) = diagram(100.0, 50.0, 120.0, 10.0);
        assert_eq!(d.pieces().count(), 0);
        assert_eq!(d.right_strip, Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
        assert!(d.bottom_strip.is_none());
    }

    #[test]
    fn test_pieces_stay_inside_sheet() {
        let (d, _) = diagram(244.0, 122.0, 33.3, 17.7);
        for piece in d.pieces() {
            assert!(piece.x + piece.width <= d.sheet.width + 1e-9);
            assert!(piece.y_max() <= d.sheet.height + 1e-9);
        }
    }

    #[test]
    fn test_tiny_leftover_still_gets_strips() {
        // Sub-millimetre leftovers on a sheet measured in metres
        let (d, layout) = diagram(1.0, 1.0, 0.333_33, 0.333_33);
        assert!(layout.leftover_width > 0.0 && layout.leftover_width < 0.0001);
        assert!(d.right_strip.is_some());
        assert!(d.bottom_strip.is_some());
        assert!((d.waste_area() - layout.leftover_area).abs() < 1e-12);
    }

    #[test]
    fn test_huge_grid_is_cheap_to_build() {
        let (d, layout) = diagram(100_000.0, 100_000.0, 1.0, 1.0);
        assert_eq!(d.piece_count(), 10_000_000_000);
        assert_eq!(layout.total_pieces, 10_000_000_000);
        assert!(matches!(
            d.check_drawable(),
            Err(CalcError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_small_grid_is_drawable() {
        let (d, _) = diagram(100.0, 100.0, 30.0, 30.0);
        assert!(d.check_drawable().is_ok());
    }
}
