//! Report Use Case
//!
//! Per-shape areas plus the aggregate area (through the injected calculator)
//! and the volume of any three-dimensional shapes.

use serde::Serialize;

use crate::domain::ports::{AreaCalculator, Shape, ThreeDimensionalShape};
use crate::domain::services::total_volume;
use crate::domain::value_objects::ShapeSpec;
use crate::error::ShapeResult;

/// Area of one input shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub shape: ShapeSpec,
    pub area: f64,
}

/// Result of the report use case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeReport {
    pub entries: Vec<ReportEntry>,
    pub total: f64,
    /// Total volume of the solids among the inputs, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl ShapeReport {
    pub fn solid_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.shape.kind().is_three_dimensional())
            .count()
    }
}

pub struct ReportUseCase<C: AreaCalculator> {
    calculator: C,
}

impl<C: AreaCalculator> ReportUseCase<C> {
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    pub fn execute(&self, specs: &[ShapeSpec]) -> ShapeResult<ShapeReport> {
        let shapes: Vec<Box<dyn Shape>> = specs.iter().map(ShapeSpec::to_shape).collect();

        let mut entries = Vec::with_capacity(specs.len());
        for (spec, shape) in specs.iter().zip(&shapes) {
            entries.push(ReportEntry {
                shape: *spec,
                area: shape.area()?,
            });
        }

        let refs: Vec<&dyn Shape> = shapes.iter().map(|s| s.as_ref()).collect();
        let total = self.calculator.sum(&refs)?;

        let solids: Vec<Box<dyn ThreeDimensionalShape>> =
            specs.iter().filter_map(ShapeSpec::to_solid).collect();
        let volume = if solids.is_empty() {
            None
        } else {
            let refs: Vec<&dyn ThreeDimensionalShape> = solids.iter().map(|s| s.as_ref()).collect();
            Some(total_volume(&refs))
        };

        Ok(ShapeReport {
            entries,
            total,
            volume,
        })
    }
}
