//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::models::ShapeSpec;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest precision that still changes how an f64 is printed.
pub const MAX_PRECISION: usize = 17;

/// areacalc - total area of a collection of shapes
///
/// Shapes come from .areacalc.toml or from the command line. Any shape
/// given on the command line replaces the configured list.
///
/// Examples:
///   areacalc
///   areacalc --rect 2x3 --circle 1
///   areacalc --triangle 4x5 --breakdown --precision 3
///   areacalc --config shapes.toml --format json
///   areacalc --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, looks for .areacalc.toml in the current directory
    #[arg(short, long, value_name = "FILE", env = "AREACALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Add a rectangle (repeatable)
    ///
    /// Example: --rect 2x3
    #[arg(
        long = "rect",
        value_name = "WxH",
        value_parser = parse_dimensions,
        allow_hyphen_values = true
    )]
    pub rects: Vec<(f64, f64)>,

    /// Add a circle by radius (repeatable)
    #[arg(long = "circle", value_name = "R", allow_negative_numbers = true)]
    pub circles: Vec<f64>,

    /// Add a triangle by base and height (repeatable)
    ///
    /// Example: --triangle 4x5
    #[arg(
        long = "triangle",
        value_name = "BxH",
        value_parser = parse_dimensions,
        allow_hyphen_values = true
    )]
    pub triangles: Vec<(f64, f64)>,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Number of decimal places for printed areas
    #[arg(long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// List every shape and per-kind subtotals before the total
    #[arg(long)]
    pub breakdown: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .areacalc.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

/// Parse a `WxH` (or `W,H`) pair of dimensions.
pub fn parse_dimensions(value: &str) -> Result<(f64, f64), String> {
    let (first, second) = value
        .split_once(['x', 'X', ','])
        .ok_or_else(|| format!("expected two dimensions like 2x3, got '{}'", value))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid dimension '{}': {}", part.trim(), e))
    };

    Ok((parse(first)?, parse(second)?))
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(precision) = self.precision {
            if precision > MAX_PRECISION {
                return Err(format!("Precision must be at most {}", MAX_PRECISION));
            }
        }

        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                return Err(format!(
                    "Config file does not exist: {}",
                    config_path.display()
                ));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Shapes given on the command line: rectangles, then circles, then triangles.
    pub fn cli_shapes(&self) -> Vec<ShapeSpec> {
        let rects = self
            .rects
            .iter()
            .map(|&(width, height)| ShapeSpec::Rectangle { width, height });
        let circles = self
            .circles
            .iter()
            .map(|&radius| ShapeSpec::Circle { radius });
        let triangles = self
            .triangles
            .iter()
            .map(|&(base, height)| ShapeSpec::Triangle { base, height });

        rects.chain(circles).chain(triangles).collect()
    }
}
