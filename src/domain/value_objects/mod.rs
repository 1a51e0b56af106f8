//! Value Objects
//!
//! Validated, immutable inputs for building shapes.

mod dimension;
mod shape_spec;

pub use dimension::Dimension;
pub use shape_spec::{parse_all, ShapeKind, ShapeSpec};
