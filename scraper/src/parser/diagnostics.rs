//! Counters collected during one parse pass.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostics {
    pub total_lines: usize,
    /// 1-based line number of the rowgroup marker, if it was found.
    pub region_start_line: Option<usize>,
    pub rows_started: usize,
    pub cells_accepted: usize,
    /// Cell markers at a depth other than the configured cell depth.
    pub cells_rejected_depth: usize,
    /// Accepted-depth cells that appeared before any row.
    pub orphan_cells: usize,
    /// Cells whose content came from a link or text line below them.
    pub lookahead_filled: usize,
    /// Cells with neither inline nor look-ahead content.
    pub lookahead_empty: usize,
}

impl ParseDiagnostics {
    pub fn region_found(&self) -> bool {
        self.region_start_line.is_some()
    }

    pub fn warnings(&self, marker: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.region_found() {
            warnings.push(format!("Rowgroup marker '{marker}' not found"));
        } else if self.rows_started == 0 {
            warnings.push("Rowgroup contains no rows".to_string());
        }

        if self.orphan_cells > 0 {
            warnings.push(format!(
                "Skipped {} cells that appeared before the first row",
                self.orphan_cells
            ));
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_region_warns() {
        let diagnostics = ParseDiagnostics::default();
        assert_eq!(
            diagnostics.warnings("rowgroup [ref=e108]"),
            vec!["Rowgroup marker 'rowgroup [ref=e108]' not found".to_string()]
        );
    }

    #[test]
    fn test_clean_run_has_no_warnings() {
        let diagnostics = ParseDiagnostics {
            total_lines: 40,
            region_start_line: Some(3),
            rows_started: 2,
            cells_accepted: 18,
            ..ParseDiagnostics::default()
        };
        assert!(diagnostics.warnings("m").is_empty());
    }

    #[test]
    fn test_orphan_cells_warn() {
        let diagnostics = ParseDiagnostics {
            region_start_line: Some(1),
            rows_started: 1,
            orphan_cells: 2,
            ..ParseDiagnostics::default()
        };
        let warnings = diagnostics.warnings("m");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("2 cells"));
    }
}
