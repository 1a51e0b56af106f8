//! Domain Entities
//!
//! Immutable shape values. Each one implements only the capabilities it can
//! answer for.

mod circle;
mod cube;
mod no_shape;
mod rectangle;
mod square;

pub use circle::Circle;
pub use cube::Cube;
pub use no_shape::NoShape;
pub use rectangle::Rectangle;
pub use square::Square;
