//! Output Rendering
//!
//! Text renderers for command results. Renderers build strings; commands
//! decide where they are written.

use crate::application::{format_number, ShapeReport};

/// Trait for rendering shape reports
pub trait ReportRenderer {
    fn render(&self, report: &ShapeReport) -> String;
}

/// Aligned two-column table: shape, area
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReportRenderer {
    pub precision: Option<u8>,
}

impl TextReportRenderer {
    pub fn new(precision: Option<u8>) -> Self {
        Self { precision }
    }
}

impl ReportRenderer for TextReportRenderer {
    fn render(&self, report: &ShapeReport) -> String {
        let labels: Vec<String> = report.entries.iter().map(|e| e.shape.to_string()).collect();
        let width = labels
            .iter()
            .map(String::len)
            .chain(["volume".len()])
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for (label, entry) in labels.iter().zip(&report.entries) {
            out.push_str(&format!(
                "{:<width$}  {}\n",
                label,
                format_number(entry.area, self.precision)
            ));
        }
        out.push_str(&format!("{}\n", "-".repeat(width + 2)));
        out.push_str(&format!(
            "{:<width$}  {}\n",
            "total",
            format_number(report.total, self.precision)
        ));
        if let Some(volume) = report.volume {
            out.push_str(&format!(
                "{:<width$}  {}\n",
                "volume",
                format_number(volume, self.precision)
            ));
        }
        out
    }
}
