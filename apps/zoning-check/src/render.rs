//! Report rendering

use zoning_types::EvaluationReport;

use crate::error::CliError;

const HEADERS: [&str; 4] = [
    "zoning_id",
    "allowed",
    "constraint_min_note",
    "constraint_max_note",
];

pub fn render_json(report: &EvaluationReport) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the result rows as an aligned text table followed by a summary line
pub fn render_table(report: &EvaluationReport) -> String {
    let rows: Vec<[String; 4]> = report
        .results
        .iter()
        .map(|r| {
            [
                r.zoning_id.to_string(),
                r.allowed.to_string(),
                r.constraint_min_note.clone().unwrap_or_default(),
                r.constraint_max_note.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&HEADERS.map(String::from), &widths));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }

    let summary = &report.summary;
    out.push_str(&format!(
        "\n{} district(s): {} allowed, {} denied, {} MAYBE\n",
        summary.total(),
        summary.allowed,
        summary.denied,
        summary.indeterminate
    ));
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}
