//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.
//! Shapes are taken as raw strings and parsed into `ShapeSpec`s by the
//! commands, so parse failures flow through the same error reporting as
//! every other failure.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::MAX_PRECISION;
use crate::config::OutputFormat;

/// shapes - total up shape areas and volumes
#[derive(Parser, Debug)]
#[command(name = "shapes")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Shapes: square:<len>  rectangle:<w>x<h>  circle:<r>  cube:<edge>  none"
)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./shapes.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the total area of the given shapes
    Sum {
        /// Shapes to add up (e.g. square:10 circle:12 rectangle:10x20)
        #[arg(value_name = "SHAPE")]
        shapes: Vec<String>,

        /// Text rendering of the sum
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Fractional digits to print (0-17)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_PRECISION)))]
        precision: Option<u8>,
    },

    /// Print the total volume of the three-dimensional shapes given
    Volume {
        /// Shapes to inspect; only cubes have a volume
        #[arg(value_name = "SHAPE")]
        shapes: Vec<String>,

        /// Fractional digits to print (0-17)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_PRECISION)))]
        precision: Option<u8>,
    },

    /// Print each shape's area, the total, and any volume
    Describe {
        /// Shapes to describe
        #[arg(value_name = "SHAPE")]
        shapes: Vec<String>,

        /// Fractional digits to print (0-17)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_PRECISION)))]
        precision: Option<u8>,
    },
}

impl Commands {
    /// Command name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Sum { .. } => "sum",
            Commands::Volume { .. } => "volume",
            Commands::Describe { .. } => "describe",
        }
    }

    /// Shape specs as given on the command line, before parsing
    pub fn shapes(&self) -> &[String] {
        match self {
            Commands::Sum { shapes, .. }
            | Commands::Volume { shapes, .. }
            | Commands::Describe { shapes, .. } => shapes,
        }
    }
}
