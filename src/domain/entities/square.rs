//! Square entity

use crate::domain::ports::Shape;
use crate::error::ShapeResult;

/// Square with equal sides of `length`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    length: f64,
}

impl Square {
    pub fn new(length: f64) -> Self {
        Self { length }
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Shape for Square {
    fn area(&self) -> ShapeResult<f64> {
        Ok(self.length * self.length)
    }
}
