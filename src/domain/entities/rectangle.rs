//! Rectangle entity

use crate::domain::ports::Shape;
use crate::error::ShapeResult;

/// Axis-free rectangle of `width` by `height`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> ShapeResult<f64> {
        Ok(self.width * self.height)
    }
}
