//! Run summary for one scraped snapshot.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::ParseDiagnostics;
use crate::project::DroppedRecord;

/// Summary of a scrape run, written next to the report on request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    pub rowgroup_marker: String,
    pub region_found: bool,
    pub records_found: usize,
    pub rows_rendered: usize,
    pub dropped: Vec<DroppedRecord>,
    pub diagnostics: ParseDiagnostics,
    pub warnings: Vec<String>,
}

impl ScrapeReport {
    /// Writes the report as YAML when `path` ends in `.yaml`/`.yml`, JSON otherwise.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let body = if is_yaml {
            serde_yaml::to_string(self)?
        } else {
            let mut json = serde_json::to_string_pretty(self)?;
            json.push('\n');
            json
        };
        std::fs::write(path, body)?;
        Ok(())
    }
}
