//! Data models for the area calculator.
//!
//! This module contains the declarative shape descriptions read from
//! config and CLI, plus the summary and report structures produced from
//! an aggregation.

use crate::shapes::{Circle, Rectangle, Shape, ShapeError, Triangle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Declarative description of a shape, as written in `.areacalc.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
    Triangle { base: f64, height: f64 },
}

impl ShapeSpec {
    /// Construct the concrete shape this spec describes.
    pub fn build(&self) -> Result<Box<dyn Shape>, ShapeError> {
        let shape: Box<dyn Shape> = match *self {
            ShapeSpec::Rectangle { width, height } => Box::new(Rectangle::new(width, height)?),
            ShapeSpec::Circle { radius } => Box::new(Circle::new(radius)?),
            ShapeSpec::Triangle { base, height } => Box::new(Triangle::new(base, height)?),
        };
        Ok(shape)
    }

    /// Build every spec in order, stopping at the first invalid one.
    pub fn build_all(specs: &[ShapeSpec]) -> Result<Vec<Box<dyn Shape>>, ShapeError> {
        specs.iter().map(ShapeSpec::build).collect()
    }
}

impl fmt::Display for ShapeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeSpec::Rectangle { width, height } => write!(f, "rectangle {}x{}", width, height),
            ShapeSpec::Circle { radius } => write!(f, "circle r={}", radius),
            ShapeSpec::Triangle { base, height } => write!(f, "triangle {}x{}", base, height),
        }
    }
}

/// Aggregate statistics over a collection of shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaSummary {
    /// Number of shapes aggregated.
    pub count: usize,
    /// Sum of all areas.
    pub total: f64,
    /// Area subtotal per shape kind.
    pub by_kind: BTreeMap<String, f64>,
}

/// A single shape as it appears in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    /// Human-readable label, e.g. `rectangle 2x3`.
    pub label: String,
    /// Shape kind as reported by the shape itself.
    pub kind: String,
    /// Area of this shape.
    pub area: f64,
}

/// Metadata about the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of shapes aggregated.
    pub shape_count: usize,
    /// Total area of all shapes.
    pub total_area: f64,
}

/// The complete area report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaReport {
    pub metadata: ReportMetadata,
    pub shapes: Vec<ShapeEntry>,
    pub summary: AreaSummary,
}

impl AreaReport {
    /// Creates a report from labelled entries and their summary.
    pub fn new(shapes: Vec<ShapeEntry>, summary: AreaSummary) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                shape_count: summary.count,
                total_area: summary.total,
            },
            shapes,
            summary,
        }
    }
}
