//! Domain Ports (Interfaces)
//!
//! These traits are the seams of the crate. Entities implement the shape
//! capabilities; services implement `AreaCalculator`.

pub mod area_calculator;
pub mod shape;
pub mod three_dimensional_shape;

pub use area_calculator::AreaCalculator;
pub use shape::Shape;
pub use three_dimensional_shape::ThreeDimensionalShape;
