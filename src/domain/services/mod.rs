//! Domain Services
//!
//! Stateless aggregation over shapes.

mod sum_calculator;
mod volume;

pub use sum_calculator::SumAreaCalculator;
pub use volume::total_volume;
