use anyhow::Result;

use super::{CommandContext, SumData};
use crate::config::OutputFormat;
use crate::domain::ports::{AreaCalculator, Shape};
use crate::domain::value_objects::{parse_all, ShapeSpec};
use crate::presentation::factory;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;

pub fn cmd_sum(
    ctx: &CommandContext,
    shapes: &[String],
    format: Option<OutputFormat>,
    precision: Option<u8>,
) -> Result<()> {
    let specs = parse_all(shapes)?;
    ctx.diagnostics.note(format!("parsed {} shape(s)", specs.len()));

    let owned: Vec<Box<dyn Shape>> = specs.iter().map(ShapeSpec::to_shape).collect();
    let refs: Vec<&dyn Shape> = owned.iter().map(|s| s.as_ref()).collect();

    let printer = factory::create_printer(precision.or(ctx.config.output.precision));

    if ctx.json {
        let sum = printer.calculator().sum(&refs)?;
        emit_event(&DataEvent::new(
            "sum",
            "sum",
            SumData {
                sum,
                shapes: specs.len(),
            },
        ))?;
        return Ok(());
    }

    match format.unwrap_or(ctx.config.output.format) {
        OutputFormat::Template => println!("{}", printer.sum_as_json(&refs)?),
        OutputFormat::Plain => {
            let sum = printer.calculator().sum(&refs)?;
            println!("{}", printer.format_value(sum));
        }
    }

    Ok(())
}
