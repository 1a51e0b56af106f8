use anyhow::{bail, Result};
use serde::Serialize;

use super::CommandContext;
use crate::domain::ports::ThreeDimensionalShape;
use crate::domain::services::total_volume;
use crate::domain::value_objects::parse_all;
use crate::application::format_number;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;

#[derive(Debug, Serialize)]
struct VolumeData {
    volume: f64,
    solids: usize,
    skipped: Vec<String>,
}

pub fn cmd_volume(ctx: &CommandContext, shapes: &[String], precision: Option<u8>) -> Result<()> {
    if shapes.is_empty() {
        bail!("no shapes given; try 'shapes volume cube:3'");
    }

    let specs = parse_all(shapes)?;

    let mut solids: Vec<Box<dyn ThreeDimensionalShape>> = Vec::new();
    let mut skipped = Vec::new();
    for spec in &specs {
        match spec.to_solid() {
            Some(solid) => solids.push(solid),
            None => {
                ctx.diagnostics
                    .note(format!("skipping {}: not three-dimensional", spec));
                skipped.push(spec.to_string());
            }
        }
    }

    let refs: Vec<&dyn ThreeDimensionalShape> = solids.iter().map(|s| s.as_ref()).collect();
    let volume = total_volume(&refs);

    if ctx.json {
        emit_event(&DataEvent::new(
            "volume",
            "volume",
            VolumeData {
                volume,
                solids: refs.len(),
                skipped,
            },
        ))?;
        return Ok(());
    }

    let precision = precision.or(ctx.config.output.precision);
    println!("{}", format_number(volume, precision));
    Ok(())
}
