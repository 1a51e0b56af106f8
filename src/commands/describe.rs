use anyhow::Result;

use super::{CommandContext, SumData};
use crate::domain::value_objects::parse_all;
use crate::presentation::factory;
use crate::presentation::output::{ReportRenderer, TextReportRenderer};
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;

pub fn cmd_describe(ctx: &CommandContext, shapes: &[String], precision: Option<u8>) -> Result<()> {
    let specs = parse_all(shapes)?;
    let report = factory::create_report_use_case().execute(&specs)?;
    ctx.diagnostics.note(format!(
        "{} shape(s), {} three-dimensional",
        report.entries.len(),
        report.solid_count()
    ));

    if ctx.json {
        for entry in &report.entries {
            emit_event(&DataEvent::new("shape", "describe", entry))?;
        }
        emit_event(&DataEvent::new(
            "sum",
            "describe",
            SumData {
                sum: report.total,
                shapes: report.entries.len(),
            },
        ))?;
        if let Some(volume) = report.volume {
            emit_event(&DataEvent::new(
                "volume",
                "describe",
                serde_json::json!({ "volume": volume, "solids": report.solid_count() }),
            ))?;
        }
        return Ok(());
    }

    let renderer = TextReportRenderer::new(precision.or(ctx.config.output.precision));
    print!("{}", renderer.render(&report));
    Ok(())
}
