//! NoShape entity
//!
//! A `Shape` that cannot produce an area. Every call to `area` fails, which
//! narrows the `Shape` contract: code written against `Shape` that works for
//! every other implementation breaks when handed this one. It exists as a
//! negative example and is exercised only by tests and the `none` shape spec.

use crate::domain::ports::Shape;
use crate::error::{ShapeError, ShapeResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoShape;

impl NoShape {
    pub fn new() -> Self {
        Self
    }
}

impl Shape for NoShape {
    fn area(&self) -> ShapeResult<f64> {
        Err(ShapeError::InvalidState {
            reason: "area is undefined for NoShape",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_always_fails_with_invalid_state() {
        let err = NoShape::new().area().unwrap_err();
        assert!(matches!(err, ShapeError::InvalidState { .. }));
    }
}
