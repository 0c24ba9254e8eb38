//! crates/internhub_core/src/directory.rs
//!
//! Search and department filtering over a snapshot, and the CSV export of the
//! full collection.

use crate::domain::InternRecord;

/// Filter value that matches every department.
pub const ALL_DEPARTMENTS: &str = "All";
/// File name offered for the exported CSV.
pub const EXPORT_FILENAME: &str = "intern_records_export.csv";
pub const EXPORT_HEADERS: [&str; 7] = [
    "Name",
    "Department",
    "Duration",
    "Projects",
    "Rating",
    "Manager",
    "Comment",
];

const DELIMITER: &str = ",";
const DELIMITER_SUBSTITUTE: &str = ";";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(String),
}

impl DepartmentFilter {
    /// Parses a filter value; `"All"` and the empty string match everything.
    pub fn parse(value: &str) -> Self {
        match value {
            "" | ALL_DEPARTMENTS => DepartmentFilter::All,
            other => DepartmentFilter::Only(other.to_string()),
        }
    }

    pub fn matches(&self, department: &str) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(wanted) => wanted == department,
        }
    }
}

/// Search text plus department filter, as entered on the directory screen.
#[derive(Debug, Clone, Default)]
pub struct DirectoryQuery {
    search: String,
    department: DepartmentFilter,
}

impl DirectoryQuery {
    pub fn new(search: &str, department: DepartmentFilter) -> Self {
        Self {
            search: search.to_lowercase(),
            department,
        }
    }

    /// Case-insensitive substring match on name or reporting manager.
    pub fn matches_search(&self, record: &InternRecord) -> bool {
        self.search.is_empty()
            || record.name.to_lowercase().contains(&self.search)
            || record.reporting_manager.to_lowercase().contains(&self.search)
    }

    pub fn matches(&self, record: &InternRecord) -> bool {
        self.matches_search(record) && self.department.matches(&record.department)
    }

    /// Returns matching records in snapshot order.
    pub fn filter<'a>(&self, records: &'a [InternRecord]) -> Vec<&'a InternRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Serializes every record as comma-separated text, header first.
///
/// Commas inside comments become semicolons; nothing is quoted. Line breaks
/// are written as-is, so a multi-line comment spans several physical lines.
pub fn export_csv(records: &[InternRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(EXPORT_HEADERS.join(DELIMITER));
    for record in records {
        let row = [
            record.name.clone(),
            record.department.clone(),
            record.duration.clone(),
            record.projects_completed.to_string(),
            record.rating.to_string(),
            record.reporting_manager.clone(),
            record.comment.replace(DELIMITER, DELIMITER_SUBSTITUTE),
        ];
        lines.push(row.join(DELIMITER));
    }
    lines.join("\n")
}
