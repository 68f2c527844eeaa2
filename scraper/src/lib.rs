//! Issue table extraction from accessibility-tree snapshot dumps.
//!
//! A snapshot dump lists a page's accessibility tree as indented
//! `- role "name"` lines. This crate finds the rowgroup holding the issue
//! list, rebuilds one [`IssueRecord`] per row from its cells and projects the
//! complete ones into [`IssueRow`]s for rendering.
//!
//! # Main entry points
//!
//! - [`scrape_snapshot`] — scrape snapshot text already in memory.
//! - [`scrape_file`] — read a snapshot file and scrape it.
//! - [`output::format_rows`] — render rows as a fixed-width table, JSON,
//!   YAML or Markdown.
//!
//! # Example
//!
//! ```
//! use issue_report_scraper::{ScrapeConfig, scrape_snapshot};
//!
//! let snapshot = r#"
//!         - rowgroup [ref=e108]:
//!           - row "42 Fix login bug" [ref=e109]:
//!             - cell "" [ref=e110]
//!             - cell "42" [ref=e111]
//!             - cell "ProjectX" [ref=e112]
//!             - cell "Bug" [ref=e113]
//!             - cell "Open" [ref=e114]
//!             - cell "High" [ref=e115]
//!             - cell "Fix login bug" [ref=e116]
//!             - cell "alice" [ref=e117]
//!             - cell "01.01.2025" [ref=e118]
//! "#;
//!
//! let outcome = scrape_snapshot(snapshot, &ScrapeConfig::default());
//! assert_eq!(outcome.rows.len(), 1);
//! assert_eq!(outcome.rows[0].subject, "Fix login bug");
//! assert_eq!(outcome.rows[0].due_date, "01.01.2025");
//! ```
//!
//! [`IssueRecord`]: issue_report_core::IssueRecord

pub mod config;
pub mod error;
pub mod output;
pub mod parser;
mod patterns;
pub mod project;
pub mod report;

use std::path::Path;

use issue_report_core::{IssueRecord, IssueRow};
use tracing::{debug, info, warn};

pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use output::{OutputFormat, format_rows, render_table};
pub use parser::{ParseDiagnostics, parse_snapshot};
pub use report::ScrapeReport;

/// Snapshot file read when no input path is given.
pub const DEFAULT_INPUT_FILE: &str = "full_content.txt";

/// Everything produced by scraping one snapshot.
#[derive(Debug, Clone)]
pub struct ScrapeOutcome {
    /// All finalized records, including ones too short to render.
    pub records: Vec<IssueRecord>,
    /// Rendered rows, in input order.
    pub rows: Vec<IssueRow>,
    pub report: ScrapeReport,
}

/// Scrapes snapshot text.
pub fn scrape_snapshot(text: &str, config: &ScrapeConfig) -> ScrapeOutcome {
    let parsed = parse_snapshot(text, config);
    let projection = project::project_records(&parsed.records, config.min_cells);

    let mut warnings = parsed.diagnostics.warnings(&config.rowgroup_marker);
    for warning in &warnings {
        warn!("{warning}");
    }

    // Short rows are left out quietly; the count only goes into the report.
    if !projection.dropped.is_empty() {
        let dropped = format!(
            "Dropped {} rows with fewer than {} cells",
            projection.dropped.len(),
            config.min_cells
        );
        let iids: Vec<&str> = projection.dropped.iter().map(|d| d.iid.as_str()).collect();
        debug!(?iids, "{dropped}");
        warnings.push(dropped);
    }

    info!(
        records = parsed.records.len(),
        rows = projection.rows.len(),
        dropped = projection.dropped.len(),
        "Scraped snapshot"
    );

    let report = ScrapeReport {
        input: None,
        rowgroup_marker: config.rowgroup_marker.clone(),
        region_found: parsed.diagnostics.region_found(),
        records_found: parsed.records.len(),
        rows_rendered: projection.rows.len(),
        dropped: projection.dropped,
        diagnostics: parsed.diagnostics,
        warnings,
    };

    ScrapeOutcome {
        records: parsed.records,
        rows: projection.rows,
        report,
    }
}

/// Reads a snapshot file and scrapes it.
///
/// # Errors
///
/// Returns [`ScrapeError::ReadInput`] if the file is missing or unreadable.
pub fn scrape_file(path: impl AsRef<Path>, config: &ScrapeConfig) -> Result<ScrapeOutcome> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ScrapeError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut outcome = scrape_snapshot(&text, config);
    outcome.report.input = Some(path.display().to_string());
    Ok(outcome)
}
