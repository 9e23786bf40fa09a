//! Area aggregation and statistics.
//!
//! This module sums areas over any collection of [`Shape`] trait objects
//! and computes per-kind summary statistics. Nothing here knows about
//! concrete shape types.

use crate::models::AreaSummary;
use crate::shapes::Shape;
use thiserror::Error;
use tracing::debug;

/// Errors raised while aggregating shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregateError {
    /// Every area is finite but their sum is not.
    #[error("total area of {count} shapes overflows")]
    TotalOverflow { count: usize },
}

/// Sum the areas of `shapes` in sequence order. An empty slice yields `0.0`.
pub fn total_area(shapes: &[&dyn Shape]) -> f64 {
    shapes.iter().fold(0.0, |acc, shape| acc + shape.area())
}


/// Compute count, total and per-kind subtotals.
pub fn summarize(shapes: &[&dyn Shape]) -> AreaSummary {
    let mut summary = AreaSummary {
        count: shapes.len(),
        total: total_area(shapes),
        ..Default::default()
    };

    for shape in shapes {
        *summary
            .by_kind
            .entry(shape.kind().to_string())
            .or_insert(0.0) += shape.area();
    }

    summary
}

/// Computes the total area of a borrowed collection of shapes.
///
/// The calculator holds references only; the caller keeps ownership of the
/// shapes and may query the calculator any number of times.
pub struct AreaCalculator<'a> {
    shapes: Vec<&'a dyn Shape>,
}

impl<'a> AreaCalculator<'a> {
    pub fn new(shapes: Vec<&'a dyn Shape>) -> Self {
        debug!("Aggregating {} shapes", shapes.len());
        Self { shapes }
    }

    /// Borrow a slice of owned trait objects.
    pub fn from_boxed(shapes: &'a [Box<dyn Shape>]) -> Self {
        Self::new(
            shapes
                .iter()
                .map(|shape| -> &dyn Shape { shape.as_ref() })
                .collect(),
        )
    }

    pub fn total_area(&self) -> f64 {
        total_area(&self.shapes)
    }

    /// Like [`AreaCalculator::total_area`], but rejects a sum that overflows.
    pub fn checked_total_area(&self) -> Result<f64, AggregateError> {
        let total = self.total_area();
        if total.is_finite() {
            Ok(total)
        } else {
            Err(AggregateError::TotalOverflow { count: self.len() })
        }
    }

    pub fn summary(&self) -> AreaSummary {
        summarize(&self.shapes)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
