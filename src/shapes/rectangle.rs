//! Axis-aligned rectangle.

use super::{require_finite_area, require_positive, Shape, ShapeError};

const KIND: &str = "rectangle";

/// A rectangle with positive width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a rectangle, rejecting non-positive or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        let width = require_positive(KIND, "width", width)?;
        let height = require_positive(KIND, "height", height)?;
        require_finite_area(KIND, width * height)?;

        Ok(Self { width, height })
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn kind(&self) -> &'static str {
        KIND
    }
}
