//! solid-shapes - shape area calculator built around small capability traits
//!
//! Shapes expose an area (`Shape`) and, when they have one, a volume
//! (`ThreeDimensionalShape`). Totals are computed by an `AreaCalculator`, and
//! `Printer` renders a total while depending only on that trait.
//!
//! ```
//! use solid_shapes::{Printer, Rectangle, Square, SumAreaCalculator};
//!
//! let printer = Printer::new(SumAreaCalculator::new());
//! let out = printer
//!     .sum_as_json(&[&Square::new(10.0), &Rectangle::new(10.0, 20.0)])
//!     .unwrap();
//! assert_eq!(out, "{\n sum: 300\n}");
//! ```

pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{Printer, ReportEntry, ReportUseCase, ShapeReport};
pub use config::{Config, OutputFormat, Verbosity};
pub use domain::entities::{Circle, Cube, NoShape, Rectangle, Square};
pub use domain::ports::{AreaCalculator, Shape, ThreeDimensionalShape};
pub use domain::services::{total_volume, SumAreaCalculator};
pub use domain::value_objects::{parse_all, Dimension, ShapeKind, ShapeSpec};
pub use error::{ShapeError, ShapeResult};
