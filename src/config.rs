//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.areacalc.toml` files.

use crate::cli::{Args, OutputFormat, MAX_PRECISION};
use crate::models::ShapeSpec;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".areacalc.toml";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Shapes to aggregate, in order.
    #[serde(default = "default_shapes")]
    pub shapes: Vec<ShapeSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            shapes: default_shapes(),
        }
    }
}

/// The documented sample: one 2x3 rectangle and one unit circle.
fn default_shapes() -> Vec<ShapeSpec> {
    vec![
        ShapeSpec::Rectangle {
            width: 2.0,
            height: 3.0,
        },
        ShapeSpec::Circle { radius: 1.0 },
    ]
}

/// General application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places for printed areas; full precision when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,

    /// List each shape and per-kind subtotals in text reports.
    #[serde(default)]
    pub breakdown: bool,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from `dir/.areacalc.toml`.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence, but only when explicitly provided.
    pub fn merge_with_args(&mut self, args: &Args) {
        let cli_shapes = args.cli_shapes();
        if !cli_shapes.is_empty() {
            self.shapes = cli_shapes;
        }

        if let Some(format) = args.format {
            self.general.format = format;
        }
        if args.precision.is_some() {
            self.general.precision = args.precision;
        }

        // Flags always override
        if args.breakdown {
            self.general.breakdown = true;
        }
    }

    /// Check settings that serde alone cannot bound.
    pub fn validate(&self) -> Result<()> {
        if let Some(precision) = self.general.precision {
            if precision > MAX_PRECISION {
                bail!(
                    "precision must be at most {}, got {}",
                    MAX_PRECISION,
                    precision
                );
            }
        }

        Ok(())
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.format, OutputFormat::Text);
        assert_eq!(config.general.precision, None);
        assert_eq!(config.shapes.len(), 2);
        assert_eq!(config.shapes[1], ShapeSpec::Circle { radius: 1.0 });
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
format = "json"
precision = 3

[[shapes]]
kind = "triangle"
base = 4.0
height = 5.0

[[shapes]]
kind = "circle"
radius = 2
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.format, OutputFormat::Json);
        assert_eq!(config.general.precision, Some(3));
        assert!(!config.general.breakdown);
        assert_eq!(
            config.shapes,
            vec![
                ShapeSpec::Triangle {
                    base: 4.0,
                    height: 5.0
                },
                ShapeSpec::Circle { radius: 2.0 },
            ]
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_shape_kind_is_rejected() {
        let toml_content = r#"
[[shapes]]
kind = "hexagon"
side = 1.0
"#;
        assert!(toml::from_str::<Config>(toml_content).is_err());
    }

    #[test]
    fn test_sample_fixture_parses() {
        let config: Config = toml::from_str(include_str!("../fixtures/shapes.toml")).unwrap();
        assert!(config.general.breakdown);
        assert_eq!(config.shapes.len(), 4);
        assert!(ShapeSpec::build_all(&config.shapes).is_ok());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[general]\nbreakdown = true\n",
        )
        .unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert!(config.general.breakdown);
        assert_eq!(config.shapes, Config::default().shapes);

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[general\n").unwrap();
        assert!(Config::load_from_dir(dir.path()).is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let args = Args::try_parse_from([
            "areacalc",
            "--triangle",
            "4x5",
            "--precision",
            "2",
            "--breakdown",
        ])
        .unwrap();

        let mut config = Config::default();
        config.general.format = OutputFormat::Json;
        config.merge_with_args(&args);

        assert_eq!(
            config.shapes,
            vec![ShapeSpec::Triangle {
                base: 4.0,
                height: 5.0
            }]
        );
        assert_eq!(config.general.precision, Some(2));
        assert!(config.general.breakdown);
        // Not given on the command line, so the config value stays.
        assert_eq!(config.general.format, OutputFormat::Json);
    }

    #[test]
    fn test_merge_without_cli_shapes_keeps_config() {
        let args = Args::try_parse_from(["areacalc"]).unwrap();
        let mut config = Config::default();
        config.merge_with_args(&args);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_precision_bound() {
        assert!(Config::default().validate().is_ok());

        let config: Config = toml::from_str("[general]\nprecision = 1000\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("precision must be at most 17"));

        let config: Config = toml::from_str("[general]\nprecision = 17\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[[shapes]]"));
        assert!(toml_str.contains("kind = \"rectangle\""));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
