//! Rendering of issue rows in the supported output formats.

use issue_report_core::{IssueColumn, IssueRow};
use serde::Serialize;

use crate::error::Result;

/// Width of the dashed line under the table header.
pub const SEPARATOR_WIDTH: usize = 155;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Fixed-width text table.
    #[default]
    Table,
    Json,
    Yaml,
    Markdown,
}

/// Row as serialized to JSON/YAML, with the due date in ISO form when valid.
#[derive(Serialize)]
struct SerializedRow<'a> {
    #[serde(flatten)]
    row: &'a IssueRow,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date_iso: Option<String>,
}

/// Formats rows in the requested output format.
pub fn format_rows(rows: &[IssueRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&serialized(rows))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&serialized(rows))?),
        OutputFormat::Markdown => Ok(render_markdown(rows)),
    }
}

fn serialized(rows: &[IssueRow]) -> Vec<SerializedRow<'_>> {
    rows.iter()
        .map(|row| SerializedRow {
            row,
            due_date_iso: row.due_date_iso(),
        })
        .collect()
}

/// Renders the fixed-width report: header, dashed separator, one line per row.
///
/// ```
/// use issue_report_core::IssueRow;
/// use issue_report_scraper::output::render_table;
///
/// let table = render_table(&[IssueRow { id: "1".into(), ..IssueRow::default() }]);
/// let lines: Vec<&str> = table.lines().collect();
/// assert!(lines[0].starts_with("ID    | Subject"));
/// assert_eq!(lines[1], "-".repeat(155));
/// assert!(lines[2].starts_with("1     | "));
/// ```
pub fn render_table(rows: &[IssueRow]) -> String {
    let mut out = String::new();

    let header: Vec<&str> = IssueColumn::ALL.iter().map(|c| c.title()).collect();
    out.push_str(&table_line(&header));
    out.push('\n');
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');

    for row in rows {
        let values: Vec<&str> = IssueColumn::ALL.iter().map(|c| row.value(*c)).collect();
        out.push_str(&table_line(&values));
        out.push('\n');
    }

    out
}

/// Joins one value per column, truncated and padded to the column width.
fn table_line(values: &[&str]) -> String {
    IssueColumn::ALL
        .iter()
        .zip(values)
        .map(|(column, value)| {
            let width = column.width();
            let shown = if column.truncates() {
                truncate_chars(value, width)
            } else {
                value
            };
            format!("{shown:<width$}")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// First `max` characters of `value`, without an ellipsis.
fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

fn render_markdown(rows: &[IssueRow]) -> String {
    let mut out = String::new();

    let titles: Vec<&str> = IssueColumn::ALL.iter().map(|c| c.title()).collect();
    out.push_str(&format!("| {} |\n", titles.join(" | ")));
    out.push_str(&format!(
        "|{}|\n",
        IssueColumn::ALL.map(|_| "---").join("|")
    ));

    for row in rows {
        let cells: Vec<String> = IssueColumn::ALL
            .iter()
            .map(|c| row.value(*c).replace('|', "\\|"))
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    out
}
