//! Use Case Factory
//!
//! The one place that picks a concrete `AreaCalculator`. Everything else
//! receives it through a generic parameter.

use crate::application::{Printer, ReportUseCase};
use crate::domain::services::SumAreaCalculator;

/// Printer wired to the default calculator
pub type ConcretePrinter = Printer<SumAreaCalculator>;

/// Report use case wired to the default calculator
pub type ConcreteReportUseCase = ReportUseCase<SumAreaCalculator>;

pub fn create_printer(precision: Option<u8>) -> ConcretePrinter {
    Printer::new(SumAreaCalculator::new()).with_precision(precision)
}

pub fn create_report_use_case() -> ConcreteReportUseCase {
    ReportUseCase::new(SumAreaCalculator::new())
}
