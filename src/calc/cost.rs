//! Cost allocation over the pieces of a layout.

use crate::config::Unit;
use crate::error::{CalcError, Result};
use crate::model::{
    CostInputs, CostOptions, CostResult, CutSpec, LayoutResult, PanelSpec, WasteSource,
};
use tracing::debug;

/// Spread the material and additional costs of a job over its good pieces.
///
/// Discard and cutting waste are two separate adjustments: discard shrinks the
/// number of good pieces, cutting waste inflates the total cost. They are never
/// merged into one yield rate.
pub fn compute_cost(
    main: &PanelSpec,
    cut: &CutSpec,
    layout: &LayoutResult,
    inputs: &CostInputs,
    options: &CostOptions,
    unit: Unit,
) -> Result<CostResult> {
    check_percent("discard_percent", inputs.discard_percent)?;

    let cutting_waste_percent = if options.apply_cutting_waste {
        match options.cutting_waste_source {
            WasteSource::DerivedFromLayout => layout.waste_percent,
            WasteSource::UserSupplied(percent) => {
                check_percent("cutting_waste_percent", percent)?;
                percent
            }
        }
    } else {
        0.0
    };

    let total_pieces = layout.total_pieces.saturating_mul(inputs.quantity as u64);
    let discard_factor = if options.apply_discard {
        (100.0 - inputs.discard_percent) / 100.0
    } else {
        1.0
    };
    let good_pieces = total_pieces as f64 * discard_factor;

    if good_pieces <= 0.0 {
        return Err(CalcError::ZeroYield {
            total_pieces,
            discard_percent: inputs.discard_percent,
        });
    }

    let waste_factor = (100.0 - cutting_waste_percent) / 100.0;
    if waste_factor <= 0.0 {
        return Err(CalcError::TotalWaste {
            waste_percent: cutting_waste_percent,
        });
    }

    let quantity = inputs.quantity as f64;
    let main_panel_area = main.area() / unit.area_divisor();
    let total_main_panel_area = main_panel_area * quantity;
    let effective_main_panel_area = total_main_panel_area * waste_factor;

    let base_cost = inputs.cost_per_area * main_panel_area * quantity + inputs.additional_cost;
    let adjusted_cost = base_cost / waste_factor;
    let cost_per_good_piece = adjusted_cost / good_pieces;

    let cut_panel_area = cut.area() / unit.area_divisor();
    let cost_per_area_of_cut_piece = cost_per_good_piece / cut_panel_area;

    check_finite("base_cost", base_cost)?;
    check_finite("adjusted_cost", adjusted_cost)?;
    check_finite("cost_per_good_piece", cost_per_good_piece)?;
    check_finite("cost_per_area_of_cut_piece", cost_per_area_of_cut_piece)?;

    debug!(
        "Cost base {:.4}, adjusted {:.4} over {:.2} good piece(s)",
        base_cost, adjusted_cost, good_pieces
    );

    Ok(CostResult {
        total_pieces,
        good_pieces,
        main_panel_area,
        total_main_panel_area,
        effective_main_panel_area,
        cutting_waste_percent,
        base_cost,
        adjusted_cost,
        cost_per_good_piece,
        cut_panel_area,
        cost_per_area_of_cut_piece,
    })
}

fn check_percent(field: &str, value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(CalcError::InvalidValue {
            field: field.to_string(),
            expected: "a percentage between 0 and 100".to_string(),
            value,
        });
    }
    Ok(())
}

/// Reject a derived figure that overflowed to infinity or NaN.
fn check_finite(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::NonFiniteCost {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
