//! shapes CLI
//!
//! Usage: shapes [--json] [-v] [--config <PATH>] <COMMAND> <SHAPE>...
//!
//! Commands:
//!   sum       Total area, rendered as `{ sum: <value> }`
//!   volume    Total volume of the three-dimensional shapes
//!   describe  Per-shape areas, total and volume

use anyhow::Result;
use clap::Parser;

use solid_shapes::commands;
use solid_shapes::presentation::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::run(&cli)
}
