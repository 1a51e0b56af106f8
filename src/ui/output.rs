//! Stderr diagnostics for text mode

use crate::config::{ConfigWarning, Verbosity};

/// Writes human-oriented notes to stderr, gated by verbosity.
///
/// Silent in JSON mode so stdout and stderr stay machine-friendly.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    verbosity: Verbosity,
    json: bool,
}

impl Diagnostics {
    /// `verbose` is the CLI `-v` count; any count raises the configured level.
    pub fn new(configured: Verbosity, verbose: u8, json: bool) -> Self {
        let verbosity = if verbose > 0 {
            Verbosity::Verbose
        } else {
            configured
        };
        Self { verbosity, json }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn is_verbose(&self) -> bool {
        !self.json && self.verbosity >= Verbosity::Verbose
    }

    /// Print a note only at verbose level
    pub fn note(&self, message: impl AsRef<str>) {
        if self.is_verbose() {
            eprintln!("· {}", message.as_ref());
        }
    }

    /// Print a warning unless quiet
    pub fn warn(&self, message: impl AsRef<str>) {
        if !self.json && self.verbosity > Verbosity::Quiet {
            eprintln!("⚠ {}", message.as_ref());
        }
    }

    pub fn config_warnings(&self, warnings: &[ConfigWarning]) {
        for w in warnings {
            self.warn(w.to_string());
        }
    }
}
