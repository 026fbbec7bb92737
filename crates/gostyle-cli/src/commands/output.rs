//! Shared output formatting for run reports.

use anyhow::Result;
use gostyle_core::{DiagnosticReport, RunReport};
use miette::GraphicalReportHandler;
use std::collections::HashMap;
use std::fmt::Write;
use std::path::Path;

use crate::OutputFormat;

/// Print a report in the specified format.
pub fn print(report: &RunReport, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => report.format_text(),
        OutputFormat::Compact => format_compact(report),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
        OutputFormat::Rich => format_rich(report, &GraphicalReportHandler::new())?,
    };
    print!("{rendered}");
    Ok(())
}

fn format_compact(report: &RunReport) -> String {
    let mut out = String::new();
    for d in &report.diagnostics {
        let _ = writeln!(out, "{}", d.format_compact());
    }
    let _ = writeln!(
        out,
        "{} diagnostic(s) in {} file(s)",
        report.diagnostics.len(),
        report.files_checked
    );
    out
}

/// Renders each diagnostic against its source, then the plain summary.
fn format_rich(report: &RunReport, handler: &GraphicalReportHandler) -> Result<String> {
    let mut sources: HashMap<&Path, String> = HashMap::new();
    let mut out = String::new();

    for d in &report.diagnostics {
        let path = d.location.file.as_path();
        // An unreadable file still gets its diagnostic, without an excerpt.
        let source = sources
            .entry(path)
            .or_insert_with(|| std::fs::read_to_string(path).unwrap_or_default())
            .clone();
        handler.render_report(&mut out, &DiagnosticReport::new(d, source))?;
        out.push('\n');
    }

    out.push_str(&report.format_text());
    Ok(out)
}
