//! Single-pass parser turning a snapshot dump into issue records.
//!
//! The scan keeps three pieces of state: whether the issue rowgroup has been
//! entered, the record under construction, and the finished records.
//!
//! - Lines before the rowgroup marker are skipped; the marker line itself
//!   only opens the region.
//! - A row-start line finalizes the previous record and opens a new one.
//! - A cell line contributes one value to the open record, but only when the
//!   marker sits exactly at the configured cell depth. Deeper cells belong to
//!   nested content and would be counted twice.
//! - A cell without inline content borrows the first `link`/`text` label in
//!   the next few lines, unless another cell or row starts first.

mod diagnostics;

use issue_report_core::IssueRecord;
use tracing::debug;

use crate::config::ScrapeConfig;
use crate::patterns;

pub use diagnostics::ParseDiagnostics;

/// Records and counters produced by one parse pass.
#[derive(Debug, Clone, Default)]
pub struct ParsedSnapshot {
    pub records: Vec<IssueRecord>,
    pub diagnostics: ParseDiagnostics,
}

/// Parses snapshot text with the given configuration.
pub fn parse_snapshot(text: &str, config: &ScrapeConfig) -> ParsedSnapshot {
    SnapshotParser::new(config).parse(text)
}

/// Parser state for one snapshot.
pub struct SnapshotParser<'a> {
    config: &'a ScrapeConfig,
    in_region: bool,
    current: Option<IssueRecord>,
    records: Vec<IssueRecord>,
    diagnostics: ParseDiagnostics,
}

impl<'a> SnapshotParser<'a> {
    pub fn new(config: &'a ScrapeConfig) -> Self {
        Self {
            config,
            in_region: false,
            current: None,
            records: Vec::new(),
            diagnostics: ParseDiagnostics::default(),
        }
    }

    /// Scans every line and returns the finalized records.
    pub fn parse(mut self, text: &str) -> ParsedSnapshot {
        let lines: Vec<&str> = text.lines().collect();
        self.diagnostics.total_lines = lines.len();

        for (index, line) in lines.iter().enumerate() {
            if !self.in_region {
                if line.contains(self.config.rowgroup_marker.as_str()) {
                    self.in_region = true;
                    self.diagnostics.region_start_line = Some(index + 1);
                    debug!(line = index + 1, "Entered issue rowgroup");
                }
                continue;
            }

            if let Some(label) = patterns::row_label(line) {
                self.start_row(label, index);
                continue;
            }

            if patterns::is_cell_marker(line) {
                self.take_cell(&lines, index);
            }
        }

        self.finish_row();

        ParsedSnapshot {
            records: self.records,
            diagnostics: self.diagnostics,
        }
    }

    fn start_row(&mut self, label: &str, index: usize) {
        self.finish_row();

        let fallback_date = patterns::last_date_in(label).unwrap_or_default();
        let record = IssueRecord::from_label(label, fallback_date);
        debug!(line = index + 1, iid = %record.iid, fallback_date, "Row start");

        self.diagnostics.rows_started += 1;
        self.current = Some(record);
    }

    fn finish_row(&mut self) {
        if let Some(record) = self.current.take() {
            self.records.push(record);
        }
    }

    fn take_cell(&mut self, lines: &[&str], index: usize) {
        let line = lines[index];
        let depth = patterns::indent_depth(line);
        if depth != self.config.cell_depth {
            self.diagnostics.cells_rejected_depth += 1;
            return;
        }
        if self.current.is_none() {
            debug!(line = index + 1, "Cell before first row");
            self.diagnostics.orphan_cells += 1;
            return;
        }

        let content = match patterns::inline_cell_content(line) {
            Some(content) => content.to_string(),
            None => match self.look_ahead(lines, index) {
                Some(label) => {
                    self.diagnostics.lookahead_filled += 1;
                    label.to_string()
                }
                None => {
                    self.diagnostics.lookahead_empty += 1;
                    String::new()
                }
            },
        };

        if let Some(record) = self.current.as_mut() {
            record.cells.push(content);
            self.diagnostics.cells_accepted += 1;
        }
    }

    /// First link/text label below `index`, stopping at the next cell or row.
    fn look_ahead<'l>(&self, lines: &[&'l str], index: usize) -> Option<&'l str> {
        for next in lines.iter().skip(index + 1).take(self.config.lookahead_lines) {
            if patterns::is_cell_marker(next) || patterns::is_row_marker(next) {
                return None;
            }
            if let Some(label) = patterns::link_or_text_label(next) {
                return Some(label);
            }
        }
        None
    }
}
