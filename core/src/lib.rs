//! Core issue types shared by the snapshot scraper and its command-line front end.
//!
//! - [`IssueRecord`] — a row as reconstructed from the snapshot: the summary
//!   label, its derived id, the accepted cell values and the fallback due date.
//! - [`IssueRow`] — the projection of a complete record onto the eight report
//!   columns.
//! - [`IssueColumn`] — column titles, widths and truncation rules of the
//!   fixed-width report.
//!
//! # Example
//!
//! ```
//! use issue_report_core::{IssueColumn, IssueRecord};
//!
//! let mut record = IssueRecord::from_label("7 Broken link 03.04.2025", "03.04.2025");
//! record.cells.push(String::new());
//! assert_eq!(record.iid, "7");
//! assert_eq!(record.cell(0), "");
//! assert_eq!(record.cell(9), "");
//! assert_eq!(IssueColumn::Subject.width(), 60);
//! ```

mod types;

pub use types::*;
