//! Scraper configuration.
//!
//! The defaults reproduce the layout of the issue list snapshot: the issue
//! rows live in the rowgroup with ref `e108`, direct row cells sit twelve
//! columns deep, and a cell's label is searched for at most four lines ahead.
//! Every value can be overridden from a YAML file.
//!
//! # Example YAML
//!
//! ```yaml
//! rowgroup_marker: "rowgroup [ref=e108]"
//! cell_depth: 12
//! lookahead_lines: 4
//! min_cells: 8
//! ```

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};

/// Literal marking the rowgroup that holds the issue rows.
pub const DEFAULT_ROWGROUP_MARKER: &str = "rowgroup [ref=e108]";
/// Indentation of cells that are direct children of a row.
pub const DEFAULT_CELL_DEPTH: usize = 12;
/// Lines inspected after a label-less cell marker.
pub const DEFAULT_LOOKAHEAD_LINES: usize = 4;
/// Cells a record needs before it is rendered.
pub const DEFAULT_MIN_CELLS: usize = 8;

/// Settings controlling how a snapshot is scanned.
///
/// # Examples
///
/// ```
/// use issue_report_scraper::ScrapeConfig;
///
/// let config: ScrapeConfig = serde_yaml::from_str("cell_depth: 10").unwrap();
/// assert_eq!(config.cell_depth, 10);
/// assert_eq!(config.lookahead_lines, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Substring of the line that opens the issue rowgroup.
    pub rowgroup_marker: String,
    /// Exact indentation a cell marker line must have to be kept.
    pub cell_depth: usize,
    /// Maximum number of lines searched for a link or text label.
    pub lookahead_lines: usize,
    /// Records with fewer cells are left out of the report.
    pub min_cells: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            rowgroup_marker: DEFAULT_ROWGROUP_MARKER.to_string(),
            cell_depth: DEFAULT_CELL_DEPTH,
            lookahead_lines: DEFAULT_LOOKAHEAD_LINES,
            min_cells: DEFAULT_MIN_CELLS,
        }
    }
}

impl ScrapeConfig {
    /// Loads configuration from a YAML file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](ScrapeError::Io) if the file cannot be read, or
    /// [`Yaml`](ScrapeError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Checks that the settings can produce a report.
    ///
    /// The report reads cells 1 through 7, so `min_cells` may not drop below
    /// [`DEFAULT_MIN_CELLS`].
    pub fn validate(&self) -> Result<()> {
        if self.rowgroup_marker.trim().is_empty() {
            return Err(ScrapeError::InvalidConfig(
                "rowgroup_marker must not be empty".to_string(),
            ));
        }
        if self.min_cells < DEFAULT_MIN_CELLS {
            return Err(ScrapeError::InvalidConfig(format!(
                "min_cells must be at least {DEFAULT_MIN_CELLS}, got {}",
                self.min_cells
            )));
        }
        Ok(())
    }
}
