//! Triangle, given by base and perpendicular height.

use super::{require_finite_area, require_positive, Shape, ShapeError};

const KIND: &str = "triangle";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    base: f64,
    height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Result<Self, ShapeError> {
        let base = require_positive(KIND, "base", base)?;
        let height = require_positive(KIND, "height", height)?;
        require_finite_area(KIND, 0.5 * base * height)?;

        Ok(Self { base, height })
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn kind(&self) -> &'static str {
        KIND
    }
}
