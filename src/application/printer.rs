//! Printer - renders an aggregate area
//!
//! Depends only on the `AreaCalculator` port. The output is JSON-shaped text,
//! not strict JSON:
//!
//! ```text
//! {
//!  sum: 752.3893421169302
//! }
//! ```
//!
//! Nothing is written to any stream; callers decide where the string goes.

use crate::domain::ports::{AreaCalculator, Shape};
use crate::error::ShapeResult;

/// Largest accepted number of fractional digits. 17 significant digits are
/// enough to round-trip any `f64`.
pub const MAX_PRECISION: u8 = 17;

/// Format a number with optional fixed precision, capped at `MAX_PRECISION`
pub fn format_number(value: f64, precision: Option<u8>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", usize::from(digits.min(MAX_PRECISION)), value),
        None => value.to_string(),
    }
}

pub struct Printer<C: AreaCalculator> {
    calculator: C,
    precision: Option<u8>,
}

impl<C: AreaCalculator> Printer<C> {
    pub fn new(calculator: C) -> Self {
        Self {
            calculator,
            precision: None,
        }
    }

    /// Fix the number of fractional digits (None = shortest round-trip form)
    pub fn with_precision(mut self, precision: Option<u8>) -> Self {
        self.precision = precision;
        self
    }

    /// Sum `shapes` through the injected calculator and wrap it in the template.
    ///
    /// Errors from the calculator (or the shapes behind it) are returned as-is.
    pub fn sum_as_json(&self, shapes: &[&dyn Shape]) -> ShapeResult<String> {
        let sum = self.calculator.sum(shapes)?;
        Ok(format!("{{\n sum: {}\n}}", self.format_value(sum)))
    }

    /// Format a value with the configured precision
    pub fn format_value(&self, value: f64) -> String {
        format_number(value, self.precision)
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }
}
