//! Shape capability and the built-in shape variants.
//!
//! Anything that can report its own area implements [`Shape`]. The
//! aggregator in [`crate::analysis`] only ever talks to this trait, so new
//! variants plug in without touching it.

pub mod circle;
pub mod rectangle;
pub mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use thiserror::Error;

/// A geometric figure that can report its area.
pub trait Shape {
    /// Area of the shape, computed from its own dimensions.
    ///
    /// Finite and non-negative for every successfully constructed shape.
    fn area(&self) -> f64;

    /// Short label used when grouping shapes in summaries.
    fn kind(&self) -> &'static str {
        "shape"
    }
}

/// Errors raised while constructing a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A dimension was zero, negative, NaN or infinite.
    #[error("invalid {dimension} for {shape}: {value} (must be a positive, finite number)")]
    InvalidDimension {
        shape: &'static str,
        dimension: &'static str,
        value: f64,
    },

    /// Dimensions are valid on their own but the area does not fit in an f64.
    #[error("area of {shape} overflows")]
    AreaOverflow { shape: &'static str },
}

/// Check that a single dimension is finite and strictly positive.
pub(crate) fn require_positive(
    shape: &'static str,
    dimension: &'static str,
    value: f64,
) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension {
            shape,
            dimension,
            value,
        })
    }
}

/// Check that a computed area is finite.
pub(crate) fn require_finite_area(shape: &'static str, area: f64) -> Result<(), ShapeError> {
    if area.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::AreaOverflow { shape })
    }
}
