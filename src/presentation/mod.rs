//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with their calculator wired in
//! - Text rendering of results
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Dependency injection point
//! - `output` - Text renderers

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_printer, create_report_use_case};
