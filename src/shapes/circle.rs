//! Circle, parameterised by radius.

use super::{require_finite_area, require_positive, Shape, ShapeError};
use std::f64::consts::PI;

const KIND: &str = "circle";

/// A circle with a positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a circle, rejecting a non-positive or non-finite radius.
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        let radius = require_positive(KIND, "radius", radius)?;
        require_finite_area(KIND, PI * radius * radius)?;

        Ok(Self { radius })
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn kind(&self) -> &'static str {
        KIND
    }
}
