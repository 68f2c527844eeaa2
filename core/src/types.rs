//! Issue record and report row definitions.
//!
//! Records are built incrementally while a snapshot is scanned and are only
//! projected into [`IssueRow`]s once complete. Both types serialize with
//! [`serde`] so the scraper can emit them as JSON or YAML.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layout used by the issue tracker for due dates (`DD.MM.YYYY`).
pub const DUE_DATE_FORMAT: &str = "%d.%m.%Y";

/// One issue row reconstructed from the snapshot, before projection.
///
/// `cells` keeps every accepted cell in appearance order, including empty
/// ones, so column positions stay aligned.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueRecord {
    /// First whitespace-delimited token of the row label.
    pub iid: String,
    /// Full summary label of the row.
    pub label: String,
    /// Accepted cell values, in appearance order.
    pub cells: Vec<String>,
    /// Last date found in the row label, or empty.
    pub fallback_date: String,
}

impl IssueRecord {
    /// Starts a record for a row label. `iid` is derived from the label.
    pub fn from_label(label: &str, fallback_date: &str) -> Self {
        Self {
            iid: label.split_whitespace().next().unwrap_or_default().to_string(),
            label: label.to_string(),
            cells: Vec::new(),
            fallback_date: fallback_date.to_string(),
        }
    }

    /// Cell value at `index`, or `""` when the row is shorter.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or_default()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// A complete issue row, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueRow {
    pub id: String,
    pub subject: String,
    pub project: String,
    pub tracker: String,
    pub status: String,
    pub priority: String,
    pub assignee: String,
    /// Due date as shown by the tracker (`DD.MM.YYYY`), or empty.
    pub due_date: String,
}

impl IssueRow {
    /// Value of a report column for this row.
    pub fn value(&self, column: IssueColumn) -> &str {
        match column {
            IssueColumn::Id => &self.id,
            IssueColumn::Subject => &self.subject,
            IssueColumn::Project => &self.project,
            IssueColumn::Tracker => &self.tracker,
            IssueColumn::Status => &self.status,
            IssueColumn::Priority => &self.priority,
            IssueColumn::Assignee => &self.assignee,
            IssueColumn::DueDate => &self.due_date,
        }
    }

    /// Due date as a calendar date, when it is one.
    ///
    /// Shape-valid but impossible dates such as `31.02.2025` yield `None`.
    pub fn due_date_parsed(&self) -> Option<NaiveDate> {
        if self.due_date.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(&self.due_date, DUE_DATE_FORMAT).ok()
    }

    /// Due date in ISO 8601 form (`YYYY-MM-DD`).
    pub fn due_date_iso(&self) -> Option<String> {
        self.due_date_parsed()
            .map(|date| date.format("%Y-%m-%d").to_string())
    }
}

/// Columns of the issue report, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueColumn {
    Id,
    Subject,
    Project,
    Tracker,
    Status,
    Priority,
    Assignee,
    DueDate,
}

impl IssueColumn {
    /// All columns in report order.
    pub const ALL: [IssueColumn; 8] = [
        IssueColumn::Id,
        IssueColumn::Subject,
        IssueColumn::Project,
        IssueColumn::Tracker,
        IssueColumn::Status,
        IssueColumn::Priority,
        IssueColumn::Assignee,
        IssueColumn::DueDate,
    ];

    /// Header title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Subject => "Subject",
            Self::Project => "Project",
            Self::Tracker => "Tracker",
            Self::Status => "Status",
            Self::Priority => "Priority",
            Self::Assignee => "Assignee",
            Self::DueDate => "Due Date",
        }
    }

    /// Column width in characters.
    pub fn width(self) -> usize {
        match self {
            Self::Id => 5,
            Self::Subject => 60,
            Self::Project => 15,
            Self::Tracker => 12,
            Self::Status => 10,
            Self::Priority => 8,
            Self::Assignee => 15,
            Self::DueDate => 10,
        }
    }

    /// Whether values longer than the width are cut. Id and due date only pad.
    pub fn truncates(self) -> bool {
        !matches!(self, Self::Id | Self::DueDate)
    }
}
