//! Application Layer
//!
//! Consumers of the domain ports. Nothing here names a concrete calculator:
//! the calculator is injected by the caller (see `presentation::factory`).

pub mod printer;
pub mod report;

pub use printer::{format_number, Printer, MAX_PRECISION};
pub use report::{ReportEntry, ReportUseCase, ShapeReport};
