//! SumAreaCalculator - the default `AreaCalculator`

use crate::domain::ports::{AreaCalculator, Shape};
use crate::error::ShapeResult;

/// Adds up areas in input order, starting from zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumAreaCalculator;

impl SumAreaCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl AreaCalculator for SumAreaCalculator {
    fn sum(&self, shapes: &[&dyn Shape]) -> ShapeResult<f64> {
        let mut total = 0.0;
        for shape in shapes {
            total += shape.area()?;
        }
        Ok(total)
    }
}
