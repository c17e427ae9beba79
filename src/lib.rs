//! panel-cut-rs - Grid cutting layout and cost calculator for rectangular panels.
//!
//! Given a main panel and a smaller cut panel, this library computes how many
//! whole pieces fit on a fixed-orientation grid, how much of the sheet is left
//! over, and what each good piece costs once defects and cutting waste are
//! accounted for. Each job can be rendered as an SVG or DXF diagram and is
//! appended to a JSON inventory.
//!
//! # Example
//!
//! ```
//! use panel_cut_rs::{run_job, CalculatorConfig, CostInputs, CutSpec, JobRequest, MemoryStore, PanelSpec};
//!
//! let job = JobRequest::new("Birch", PanelSpec::new(100.0, 100.0), CutSpec::new(30.0, 30.0))
//!     .with_costs(CostInputs { quantity: 1, cost_per_area: 10.0, additional_cost: 0.0, discard_percent: 0.0 });
//! let mut store = MemoryStore::new();
//! let report = run_job(&job, &CalculatorConfig::default(), &mut store).unwrap();
//! assert_eq!(report.layout.total_pieces, 9);
//! ```

pub mod calc;
pub mod config;
pub mod error;
pub mod generator;
pub mod inventory;
pub mod model;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use calc::{compute_cost, compute_layout};
pub use config::{CalculatorConfig, Unit};
pub use error::{CalcError, Result};
pub use generator::{build_diagram, render_dxf, render_svg, Diagram, ReportWriter};
pub use inventory::{InventoryStore, JsonFileStore, MemoryStore};
pub use model::{
    CostInputs, CostOptions, CostResult, CutSpec, InventoryEntry, JobRequest, LayoutResult,
    PanelSpec, WasteSource,
};
pub use parser::parse_job_file;
pub use validation::{validate_job, ValidationResult};

use serde::Serialize;

/// Everything computed for one job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobReport {
    pub layout: LayoutResult,
    pub cost: CostResult,
    pub diagram: Diagram,
    pub entry: InventoryEntry,
}

/// Cost options for a job.
///
/// A cutting waste percentage entered with the job takes precedence over the
/// configured source; otherwise the configured source is used as is.
pub fn resolve_cost_options(job: &JobRequest, config: &CalculatorConfig) -> CostOptions {
    match job.cutting_waste_percent {
        Some(percent) => CostOptions {
            cutting_waste_source: WasteSource::UserSupplied(percent),
            ..config.options
        },
        None => config.options,
    }
}

/// Build the inventory snapshot of a finished job.
pub fn build_inventory_entry(
    job: &JobRequest,
    cost: &CostResult,
    unit: Unit,
) -> InventoryEntry {
    let date = if job.date.trim().is_empty() {
        jiff::Zoned::now().date().to_string()
    } else {
        job.date.clone()
    };

    InventoryEntry {
        name: job.name.clone(),
        date,
        dimensions: format!(
            "{} {} -> {} {}",
            job.main.dimensions_string(),
            unit,
            job.cut.dimensions_string(),
            unit
        ),
        unit,
        quantity: job.costs.quantity,
        cost_per_area: job.costs.cost_per_area,
        total_cost: cost.adjusted_cost,
        total_pieces: cost.total_pieces,
        good_pieces: cost.whole_good_pieces(),
    }
}

/// Validate a job and compute everything it produces, without storing it.
pub fn compute_job(job: &JobRequest, config: &CalculatorConfig) -> Result<JobReport> {
    let validation = validate_job(job);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    validation.into_result()?;

    let layout = compute_layout(&job.main, &job.cut);
    let options = resolve_cost_options(job, config);
    let cost = compute_cost(
        &job.main,
        &job.cut,
        &layout,
        &job.costs,
        &options,
        config.unit,
    )?;
    let diagram = build_diagram(&job.main, &job.cut, &layout);
    let entry = build_inventory_entry(job, &cost, config.unit);

    Ok(JobReport {
        layout,
        cost,
        diagram,
        entry,
    })
}

/// Run one job end to end, calling `render` before the job is recorded.
///
/// The inventory append is the last step: if validation, the calculation or
/// `render` fails, nothing is stored.
pub fn run_job_with<F>(
    job: &JobRequest,
    config: &CalculatorConfig,
    store: &mut dyn InventoryStore,
    render: F,
) -> Result<JobReport>
where
    F: FnOnce(&JobReport) -> Result<()>,
{
    let report = compute_job(job, config)?;
    render(&report)?;
    store.append(report.entry.clone())?;
    Ok(report)
}

/// Run one job end to end and append it to the inventory.
pub fn run_job(
    job: &JobRequest,
    config: &CalculatorConfig,
    store: &mut dyn InventoryStore,
) -> Result<JobReport> {
    run_job_with(job, config, store, |_| Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobRequest {
        JobRequest::new(
            "Test",
            PanelSpec::new(100.0, 100.0),
            CutSpec::new(30.0, 30.0),
        )
        .with_date("2024-01-02")
        .with_costs(CostInputs {
            quantity: 1,
            cost_per_area: 10.0,
            additional_cost: 0.0,
            discard_percent: 0.0,
        })
    }

    #[test]
    fn test_resolve_options_prefers_job_waste() {
        let config = CalculatorConfig::default();
        let options = resolve_cost_options(&job().with_cutting_waste(5.0), &config);
        assert_eq!(options.cutting_waste_source, WasteSource::UserSupplied(5.0));
        assert!(options.apply_discard);

        let options = resolve_cost_options(&job(), &config);
        assert_eq!(options.cutting_waste_source, WasteSource::DerivedFromLayout);
    }

    #[test]
    fn test_resolve_options_keeps_configured_source() {
        let mut config = CalculatorConfig::default();
        config.options.cutting_waste_source = WasteSource::UserSupplied(15.0);
        let options = resolve_cost_options(&job(), &config);
        assert_eq!(options.cutting_waste_source, WasteSource::UserSupplied(15.0));
    }

    #[test]
    fn test_inventory_entry() {
        let job = job();
        let layout = compute_layout(&job.main, &job.cut);
        let cost = compute_cost(
            &job.main,
            &job.cut,
            &layout,
            &job.costs,
            &CostOptions::default(),
            Unit::Centimeters,
        )
        .unwrap();
        let entry = build_inventory_entry(&job, &cost, Unit::Centimeters);
        assert_eq!(entry.name, "Test");
        assert_eq!(entry.date, "2024-01-02");
        assert_eq!(entry.dimensions, "100 x 100 cm -> 30 x 30 cm");
        assert_eq!(entry.total_pieces, 9);
        assert_eq!(entry.good_pieces, 9);
    }

    #[test]
    fn test_inventory_entry_defaults_date_to_today() {
        let mut job = job();
        job.date = String::new();
        let cost = CostResult::default();
        let entry = build_inventory_entry(&job, &cost, Unit::Centimeters);
        // ISO date: YYYY-MM-DD
        assert_eq!(entry.date.len(), 10);
        assert_eq!(entry.date.as_bytes()[4], b'-');
    }

    #[test]
    fn test_failed_render_is_not_stored() {
        let mut store = MemoryStore::new();
        let result = run_job_with(&job(), &CalculatorConfig::default(), &mut store, |_| {
            Err(CalcError::OutputFailed {
                path: std::path::PathBuf::from("/missing/dir/layout.svg"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            })
        });
        assert!(matches!(result, Err(CalcError::OutputFailed { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_render_sees_the_report() {
        let mut store = MemoryStore::new();
        let mut rendered = 0;
        let report = run_job_with(&job(), &CalculatorConfig::default(), &mut store, |r| {
            rendered = r.diagram.piece_count();
            Ok(())
        })
        .unwrap();
        assert_eq!(rendered, 9);
        assert_eq!(store.load().unwrap(), vec![report.entry]);
    }

    #[test]
    fn test_compute_job_does_not_store() {
        let report = compute_job(&job(), &CalculatorConfig::default()).unwrap();
        assert_eq!(report.layout.total_pieces, 9);
        assert_eq!(report.entry.unit, Unit::Centimeters);
    }

    #[test]
    fn test_failed_job_is_not_stored() {
        let mut store = MemoryStore::new();
        let mut job = job();
        job.cut.width = 150.0;
        let result = run_job(&job, &CalculatorConfig::default(), &mut store);
        assert!(matches!(result, Err(CalcError::ZeroYield { .. })));
        assert!(store.is_empty());
    }
}
