//! User-facing output helpers: NDJSON events and stderr diagnostics.

pub mod json;
pub mod output;
