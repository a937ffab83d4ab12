use crate::stats::{CategoryShare, TrafficSummary};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Render the summary as the plain-text report: Country, OS, Browser
/// sections separated by blank lines, one `label: NN.NN%` row per entry.
pub fn render(summary: &TrafficSummary) -> String {
    let mut out = String::new();
    section(&mut out, "Country", &summary.country);
    out.push('\n');
    section(&mut out, "OS", &summary.os);
    out.push('\n');
    section(&mut out, "Browser", &summary.browser);
    out
}

fn section(out: &mut String, title: &str, rows: &[CategoryShare]) {
    let _ = writeln!(out, "{title}:");
    for row in rows {
        let _ = writeln!(out, "{}: {:.2}%", row.label, row.percent);
    }
}

/// Write the report to `path`, creating parent directories and overwriting
/// any previous report.
pub fn write_report(summary: &TrafficSummary, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render(summary))
}
