//! Fixed-orientation grid fit of one cut size on the main panel.

use crate::model::{CutSpec, LayoutResult, PanelSpec};
use tracing::debug;

/// Tile the cut panel over the main panel in a single orientation.
///
/// Pieces are laid in a grid from one corner; whatever is left along the right
/// and bottom edges is waste. No rotation, no filling of the leftover strips.
pub fn compute_layout(main: &PanelSpec, cut: &CutSpec) -> LayoutResult {
    let per_row = fit_count(main.width, cut.width);
    let per_column = fit_count(main.height, cut.height);
    let total_pieces = per_row.saturating_mul(per_column);

    // Clamp away floating-point residue from the multiplication
    let leftover_width = (main.width - per_row as f64 * cut.width).max(0.0);
    let leftover_height = (main.height - per_column as f64 * cut.height).max(0.0);

    // Right strip plus bottom strip, minus the corner counted twice
    let leftover_area = (leftover_width * main.height + leftover_height * main.width
        - leftover_width * leftover_height)
        .max(0.0);

    let main_area = main.area();
    let waste_percent = if main_area > 0.0 {
        leftover_area / main_area * 100.0
    } else {
        0.0
    };

    debug!(
        "Layout {}x{} = {} piece(s), leftover {:.2} ({:.2}%)",
        per_row, per_column, total_pieces, leftover_area, waste_percent
    );

    LayoutResult {
        per_row,
        per_column,
        total_pieces,
        leftover_width,
        leftover_height,
        leftover_area,
        waste_percent,
    }
}

/// Whole pieces of `piece` length that fit in `length`.
///
/// The floor is taken in f64; the cast to u64 saturates only past 1.8e19.
fn fit_count(length: f64, piece: f64) -> u64 {
    if !(piece > 0.0) || !length.is_finite() || length <= 0.0 {
        return 0;
    }
    (length / piece).floor() as u64
}
