//! Cube entity
//!
//! The only shape with both capabilities: surface area and volume.

use crate::domain::ports::{Shape, ThreeDimensionalShape};
use crate::error::ShapeResult;

/// Cube with edges of length `edge`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    edge: f64,
}

impl Cube {
    pub fn new(edge: f64) -> Self {
        Self { edge }
    }

    pub fn edge(&self) -> f64 {
        self.edge
    }
}

impl Shape for Cube {
    /// Surface area: six square faces
    fn area(&self) -> ShapeResult<f64> {
        Ok(6.0 * self.edge * self.edge)
    }
}

impl ThreeDimensionalShape for Cube {
    fn volume(&self) -> f64 {
        self.edge * self.edge * self.edge
    }
}
