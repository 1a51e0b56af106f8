//! Circle entity

use std::f64::consts::PI;

use crate::domain::ports::Shape;
use crate::error::ShapeResult;

/// Circle of `radius`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> ShapeResult<f64> {
        Ok(PI * self.radius.powi(2))
    }
}
