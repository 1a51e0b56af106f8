//! Command handlers
//!
//! `run` wraps every command: in JSON mode it brackets the command's own
//! events with `start` and `complete`, and reports failures as an `error`
//! event before handing the error back to `main`.

mod describe;
mod sum;
mod volume;

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;

use crate::config::{self, Config};
use crate::error::ShapeError;
use crate::presentation::{Cli, Commands};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ErrorEvent, StartEvent};
use crate::ui::output::Diagnostics;

pub use describe::cmd_describe;
pub use sum::cmd_sum;
pub use volume::cmd_volume;

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub json: bool,
    pub config: Config,
    pub diagnostics: Diagnostics,
}

/// Total and count, shared by `sum` and `describe` JSON output
#[derive(Debug, Clone, Serialize)]
pub struct SumData {
    pub sum: f64,
    pub shapes: usize,
}

pub fn run(cli: &Cli) -> Result<()> {
    if !cli.json {
        return execute(cli);
    }

    let name = cli.command.name();
    let started = Instant::now();
    emit_event(&StartEvent::new(name, cli.command.shapes().len()))?;

    match execute(cli) {
        Ok(()) => {
            emit_event(&CompleteEvent::new(name, true, elapsed_ms(started)))?;
            Ok(())
        }
        Err(err) => {
            emit_event(&ErrorEvent::new(
                name,
                error_code(&err),
                err.to_string(),
                error_help(&err),
            ))?;
            emit_event(&CompleteEvent::new(name, false, elapsed_ms(started)))?;
            Err(err)
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let loaded = config::load_layered(cli.config.as_deref(), &working_dir)?;

    let diagnostics = Diagnostics::new(loaded.config.output.verbosity, cli.verbose, cli.json);
    match &loaded.source {
        Some(path) => diagnostics.note(format!("config: {}", path.display())),
        None => diagnostics.note("config: built-in defaults"),
    }
    diagnostics.config_warnings(&loaded.warnings);

    let ctx = CommandContext {
        json: cli.json,
        config: loaded.config,
        diagnostics,
    };

    match &cli.command {
        Commands::Sum {
            shapes,
            format,
            precision,
        } => cmd_sum(&ctx, shapes, *format, *precision),
        Commands::Volume { shapes, precision } => cmd_volume(&ctx, shapes, *precision),
        Commands::Describe { shapes, precision } => cmd_describe(&ctx, shapes, *precision),
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(shape_err) = err.downcast_ref::<ShapeError>() {
        return shape_err.code();
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return "io";
    }
    "usage"
}

fn error_help(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<ShapeError>()? {
        ShapeError::InvalidState { .. } => Some("'none' has no area; remove it from the shape list"),
        ShapeError::UnknownShape { .. } | ShapeError::InvalidDimension { .. } => Some(
            "shapes are written square:<len>, rectangle:<w>x<h>, circle:<r>, cube:<edge> or none",
        ),
        ShapeError::Config { .. } => Some("see the [output] keys: format, precision, verbosity"),
        ShapeError::Io(_) => None,
    }
}
