//! AreaCalculator port - reduces shapes to a total area
//!
//! Consumers such as `Printer` hold one of these instead of a concrete
//! calculator, so the aggregation strategy can be swapped (or faked in tests).

use crate::domain::ports::Shape;
use crate::error::ShapeResult;

/// Aggregates the area of a sequence of shapes.
pub trait AreaCalculator {
    /// Total area of `shapes`; zero for an empty slice.
    ///
    /// Errors raised by a shape are returned unchanged.
    fn sum(&self, shapes: &[&dyn Shape]) -> ShapeResult<f64>;
}

impl<C: AreaCalculator + ?Sized> AreaCalculator for &C {
    fn sum(&self, shapes: &[&dyn Shape]) -> ShapeResult<f64> {
        (**self).sum(shapes)
    }
}

impl<C: AreaCalculator + ?Sized> AreaCalculator for Box<C> {
    fn sum(&self, shapes: &[&dyn Shape]) -> ShapeResult<f64> {
        (**self).sum(shapes)
    }
}
