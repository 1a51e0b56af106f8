//! Shape port - the area capability

use crate::error::ShapeResult;

/// Anything with a two-dimensional area.
///
/// Implementations:
/// - `Square`, `Rectangle`, `Circle` - plane figures
/// - `Cube` - surface area of a solid
/// - `NoShape` - always fails; kept as a counter-example of substitutability
///
/// A conforming implementation returns a finite, non-negative area for
/// non-negative dimensions and never returns `Err`.
pub trait Shape {
    /// Geometric area
    fn area(&self) -> ShapeResult<f64>;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn area(&self) -> ShapeResult<f64> {
        (**self).area()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn area(&self) -> ShapeResult<f64> {
        (**self).area()
    }
}
