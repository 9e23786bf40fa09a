//! areacalc - total area over an open set of shape types
//!
//! A CLI tool that builds shapes from `.areacalc.toml` or command-line
//! flags, sums their areas through the `Shape` trait and prints a report.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Error (invalid arguments, unreadable config, invalid shape)

mod analysis;
mod cli;
mod config;
mod models;
mod report;
mod shapes;

use analysis::AreaCalculator;
use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::{Config, CONFIG_FILE_NAME};
use models::{AreaReport, ShapeEntry, ShapeSpec};
use report::TextOptions;
use shapes::Shape;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    debug!("areacalc v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("Calculation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .areacalc.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    std::fs::write(path, Config::default_toml())
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("Created {} with the sample shapes.", CONFIG_FILE_NAME);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so stdout only carries the report.
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run the calculation and emit the report.
fn run(args: Args) -> Result<()> {
    let mut config = load_config(&args, Path::new("."))?;
    config.merge_with_args(&args);
    config.validate()?;

    let shapes = ShapeSpec::build_all(&config.shapes).context("Invalid shape")?;
    let calculator = AreaCalculator::from_boxed(&shapes);

    if calculator.is_empty() {
        warn!("No shapes configured; total area is 0");
    }

    let total = calculator.checked_total_area()?;
    info!("Aggregated {} shapes, total area {}", calculator.len(), total);

    let report = build_report(&config.shapes, &shapes, &calculator);

    let output = match config.general.format {
        OutputFormat::Json => report::generate_json_report(&report)?,
        OutputFormat::Text => {
            let options = TextOptions {
                precision: config.general.precision,
                breakdown: config.general.breakdown,
            };
            report::generate_text_report(&report, &options)
        }
    };

    match args.output {
        Some(ref path) => {
            report::write_report(&output, path)?;
            info!("Report saved to: {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Pair each spec with its constructed shape and summarize the lot.
fn build_report(
    specs: &[ShapeSpec],
    shapes: &[Box<dyn Shape>],
    calculator: &AreaCalculator<'_>,
) -> AreaReport {
    let entries = specs
        .iter()
        .zip(shapes)
        .map(|(spec, shape)| ShapeEntry {
            label: spec.to_string(),
            kind: shape.kind().to_string(),
            area: shape.area(),
        })
        .collect();

    AreaReport::new(entries, calculator.summary())
}

/// Load configuration from `--config`, else `dir/.areacalc.toml`, else defaults.
///
/// A config file that exists but cannot be read or parsed is an error.
fn load_config(args: &Args, dir: &Path) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    match Config::load_from_dir(dir)? {
        Some(config) => {
            debug!("Loaded config from {}", dir.join(CONFIG_FILE_NAME).display());
            Ok(config)
        }
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
