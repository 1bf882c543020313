// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use core_lines_engine::{LineCount, Report};
use std::fmt::Write;

const TOTAL_LABEL: &str = "Core total:";

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_report(report)),
        OutputFormat::Json => format_json(report),
    }
}

/// Render the fixed-layout text table.
///
/// Labels are left-aligned in a 16-column field and counts right-aligned in
/// 5 columns, so rows line up for any count below 100 000.
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.title);
    out.push('\n');

    for entry in &report.entries {
        push_row(&mut out, &entry.label, entry.lines);
    }

    out.push('\n');
    push_row(&mut out, TOTAL_LABEL, report.total);
    out.push('\n');

    let excludes = if report.excludes.is_empty() {
        "none".to_string()
    } else {
        report.excludes.join(", ")
    };
    let _ = writeln!(out, "  (excludes: {excludes})");
    out
}

fn push_row(out: &mut String, label: &str, lines: LineCount) {
    let _ = writeln!(out, "  {label:<16} {lines:>5} lines");
}

pub fn format_json(report: &Report) -> Result<String> {
    let value = serde_json::json!({
        "title": report.title,
        "entries": report.entries,
        "total": report.total,
        "excludes": report.excludes,
    });
    let mut json = serde_json::to_string_pretty(&value)?;
    json.push('\n');
    Ok(json)
}
