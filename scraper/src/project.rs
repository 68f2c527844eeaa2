//! Projection of finished records onto report rows.
//!
//! Column positions in a record: 0 is the checkbox/label column and is not
//! reported, 1..=7 hold id, project, tracker, status, priority, subject and
//! assignee. The due date is searched across all cells.

use issue_report_core::{IssueRecord, IssueRow};
use serde::{Deserialize, Serialize};

use crate::patterns;

/// A record left out of the report for having too few cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedRecord {
    pub iid: String,
    pub cells: usize,
}

/// Rows that made it into the report and records that did not.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    pub rows: Vec<IssueRow>,
    pub dropped: Vec<DroppedRecord>,
}

/// Projects every record with at least `min_cells` cells, in input order.
pub fn project_records(records: &[IssueRecord], min_cells: usize) -> Projection {
    let mut projection = Projection::default();
    for record in records {
        if record.cell_count() < min_cells {
            projection.dropped.push(DroppedRecord {
                iid: record.iid.clone(),
                cells: record.cell_count(),
            });
            continue;
        }
        projection.rows.push(project_record(record));
    }
    projection
}

/// Maps record cells onto report columns. Missing cells read as empty.
pub fn project_record(record: &IssueRecord) -> IssueRow {
    IssueRow {
        id: record.cell(1).to_string(),
        project: record.cell(2).to_string(),
        tracker: record.cell(3).to_string(),
        status: record.cell(4).to_string(),
        priority: record.cell(5).to_string(),
        subject: record.cell(6).to_string(),
        assignee: record.cell(7).to_string(),
        due_date: due_date(record).to_string(),
    }
}

/// Last cell that is exactly a date, else the date from the row label.
pub fn due_date(record: &IssueRecord) -> &str {
    record
        .cells
        .iter()
        .rev()
        .find(|cell| patterns::is_date(cell))
        .map(String::as_str)
        .unwrap_or(record.fallback_date.as_str())
}
