//! panel-cut - CLI tool for panel cutting layouts and piece costs.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use panel_cut_rs::generator::{GRAY_THEME, PAPER_THEME};
use panel_cut_rs::{
    parse_job_file, render_dxf, render_svg, run_job_with, CalcError, CalculatorConfig,
    CutSpec, InventoryStore, JobReport, JobRequest, JsonFileStore, MemoryStore,
    PanelSpec, ReportWriter, Unit,
};

/// Compute how many pieces fit on a panel and what each one costs.
#[derive(Parser, Debug)]
#[command(name = "panel-cut")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Inventory file (overrides the configured one)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Unit of the panel dimensions (mm, cm, m, in)
    #[arg(short, long, global = true)]
    unit: Option<Unit>,

    /// Currency symbol for amounts
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a cutting layout, print the results and record the job
    Generate(GenerateArgs),
    /// Show the recorded jobs
    List,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Read the job from a JSON file instead of the flags below
    #[arg(short, long, conflicts_with_all = ["main_width", "main_height", "cut_width", "cut_height"])]
    job: Option<PathBuf>,

    /// Panel name
    #[arg(short, long, default_value = "")]
    name: String,

    /// Job date (defaults to today)
    #[arg(long, default_value = "")]
    date: String,

    /// Width of the main panel
    #[arg(long, required_unless_present = "job")]
    main_width: Option<f64>,

    /// Height of the main panel
    #[arg(long, required_unless_present = "job")]
    main_height: Option<f64>,

    /// Width of the cut panel
    #[arg(long, required_unless_present = "job")]
    cut_width: Option<f64>,

    /// Height of the cut panel
    #[arg(long, required_unless_present = "job")]
    cut_height: Option<f64>,

    /// Quantity of main panels [default: 1]
    #[arg(short, long)]
    quantity: Option<u32>,

    /// Cost per area unit (sqm, or sqft for inches) [default: 0]
    #[arg(long)]
    cost_per_area: Option<f64>,

    /// Additional costs, e.g. transport [default: 0]
    #[arg(long)]
    additional_cost: Option<f64>,

    /// Discarded panels percentage (due to defects) [default: 0]
    #[arg(long)]
    discard_percent: Option<f64>,

    /// Cutting waste percentage, replacing the value derived from the layout
    #[arg(long)]
    cutting_waste: Option<f64>,

    /// Write the diagram as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write the diagram as DXF
    #[arg(long)]
    dxf: Option<PathBuf>,

    /// Use the grayscale SVG theme
    #[arg(long)]
    gray: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Do not record the job in the inventory
    #[arg(long)]
    no_save: bool,
}

impl GenerateArgs {
    /// Build the job request from the job file or the flags.
    ///
    /// Flags given together with `--job` override the values in the file.
    fn to_job(&self) -> Result<JobRequest> {
        let mut job = match &self.job {
            Some(path) => parse_job_file(path)
                .with_context(|| format!("Failed to read job {}", path.display()))?,
            None => {
                // clap enforces these when no job file is given
                let dim = |value: Option<f64>, flag: &str| {
                    value.with_context(|| format!("Missing --{}", flag))
                };
                JobRequest {
                    main: PanelSpec::new(
                        dim(self.main_width, "main-width")?,
                        dim(self.main_height, "main-height")?,
                    ),
                    cut: CutSpec::new(
                        dim(self.cut_width, "cut-width")?,
                        dim(self.cut_height, "cut-height")?,
                    ),
                    ..Default::default()
                }
            }
        };

        if !self.name.is_empty() {
            job.name = self.name.clone();
        }
        if !self.date.is_empty() {
            job.date = self.date.clone();
        }
        if let Some(quantity) = self.quantity {
            job.costs.quantity = quantity;
        }
        if let Some(cost_per_area) = self.cost_per_area {
            job.costs.cost_per_area = cost_per_area;
        }
        if let Some(additional_cost) = self.additional_cost {
            job.costs.additional_cost = additional_cost;
        }
        if let Some(discard_percent) = self.discard_percent {
            job.costs.discard_percent = discard_percent;
        }
        if self.cutting_waste.is_some() {
            job.cutting_waste_percent = self.cutting_waste;
        }

        Ok(job)
    }

    /// Write the requested diagram files.
    fn write_diagrams(&self, report: &JobReport, unit: Unit) -> panel_cut_rs::Result<()> {
        if let Some(path) = &self.svg {
            let theme = if self.gray { &GRAY_THEME } else { &PAPER_THEME };
            let document = render_svg(&report.diagram, theme, unit)?;
            svg::save(path, &document).map_err(|source| CalcError::OutputFailed {
                path: path.clone(),
                source,
            })?;
            info!("Generated: {}", path.display());
        }

        if let Some(path) = &self.dxf {
            std::fs::write(path, render_dxf(&report.diagram)?).map_err(|source| {
                CalcError::OutputFailed {
                    path: path.clone(),
                    source,
                }
            })?;
            info!("Generated: {}", path.display());
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    match &cli.command {
        Command::Generate(args) => generate(args, &config),
        Command::List => list(&config),
    }
}

/// Merge the config file and the global flags.
fn load_config(cli: &Cli) -> Result<CalculatorConfig> {
    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    if let Some(store) = &cli.store {
        config.store_path = store.clone();
    }
    if let Some(unit) = cli.unit {
        config.unit = unit;
    }
    if let Some(currency) = &cli.currency {
        config.currency = currency.clone();
    }

    Ok(config)
}

fn generate(args: &GenerateArgs, config: &CalculatorConfig) -> Result<()> {
    let job = args.to_job()?;

    info!(
        "Processing: {} ({} -> {})",
        if job.name.is_empty() { "<unnamed>" } else { job.name.as_str() },
        job.main.dimensions_string(),
        job.cut.dimensions_string()
    );

    // Diagram files are written before the job is recorded
    let render = |report: &JobReport| args.write_diagrams(report, config.unit);
    let report = if args.no_save {
        run_job_with(&job, config, &mut MemoryStore::new(), render)?
    } else {
        let mut store = JsonFileStore::new(&config.store_path);
        run_job_with(&job, config, &mut store, render)
            .with_context(|| format!("Job failed (inventory {})", config.store_path.display()))?
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{}", json);
        return Ok(());
    }

    let mut writer = ReportWriter::new(config.currency.as_str(), config.unit);
    writer.write_results(&report.layout, &report.cost);
    print!("{}", writer.take_output());

    Ok(())
}

fn list(config: &CalculatorConfig) -> Result<()> {
    let store = JsonFileStore::new(&config.store_path);
    let entries = store
        .load()
        .with_context(|| format!("Failed to read {}", config.store_path.display()))?;

    info!("Loaded {} entr(ies)", entries.len());

    let mut writer = ReportWriter::new(config.currency.as_str(), config.unit);
    writer.write_inventory(&entries);
    print!("{}", writer.take_output());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_args(args: &[&str]) -> GenerateArgs {
        let cli = Cli::try_parse_from(["panel-cut", "generate"].iter().chain(args).copied()).unwrap();
        match cli.command {
            Command::Generate(args) => args,
            other => panic!("Expected generate, got {:?}", other),
        }
    }

    #[test]
    fn test_flags_build_job() {
        let args = generate_args(&[
            "--main-width", "100", "--main-height", "100",
            "--cut-width", "30", "--cut-height", "30",
            "--cost-per-area", "10",
        ]);
        let job = args.to_job().unwrap();
        assert_eq!(job.main, PanelSpec::new(100.0, 100.0));
        assert_eq!(job.costs.quantity, 1);
        assert_eq!(job.costs.cost_per_area, 10.0);
        assert_eq!(job.costs.discard_percent, 0.0);
    }

    #[test]
    fn test_flags_override_job_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"main": {"width": 100, "height": 100}, "cut": {"width": 30, "height": 30},
                "costs": {"quantity": 2, "cost_per_area": 10, "additional_cost": 5, "discard_percent": 1}}"#,
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let job = generate_args(&["--job", path]).to_job().unwrap();
        assert_eq!(job.costs.quantity, 2);
        assert_eq!(job.costs.discard_percent, 1.0);

        let job = generate_args(&["--job", path, "-q", "7", "--discard-percent", "3"])
            .to_job()
            .unwrap();
        assert_eq!(job.costs.quantity, 7);
        assert_eq!(job.costs.discard_percent, 3.0);
        assert_eq!(job.costs.cost_per_area, 10.0);
        assert_eq!(job.costs.additional_cost, 5.0);
    }

    #[test]
    fn test_unwritable_svg_leaves_inventory_untouched() {
        let dir = tempfile::TempDir::new().unwrap();
        let store_path = dir.path().join("inventory.json");
        let svg_path = dir.path().join("missing").join("layout.svg");
        let args = generate_args(&[
            "--main-width", "100", "--main-height", "100",
            "--cut-width", "30", "--cut-height", "30",
            "--cost-per-area", "10",
            "--svg", svg_path.to_str().unwrap(),
        ]);
        let config = CalculatorConfig {
            store_path: store_path.clone(),
            ..Default::default()
        };

        assert!(generate(&args, &config).is_err());
        assert!(!store_path.exists());
    }
}
