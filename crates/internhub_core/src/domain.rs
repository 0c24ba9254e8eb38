//! crates/internhub_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! The serde field names are the persisted layout: every stored blob is a JSON
//! array of `InternRecord` using exactly these camelCase keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest rating a manager can assign.
pub const MIN_RATING: u8 = 1;
/// Highest rating a manager can assign.
pub const MAX_RATING: u8 = 10;

/// Department names offered as form suggestions. The store accepts any text.
pub const KNOWN_DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Product",
    "Design",
    "Marketing",
    "Human Resources",
    "Finance",
];

/// One intern performance entry.
///
/// Immutable once inserted into the store; `ai_summary` is written exactly once
/// by the add flow before insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternRecord {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub department: String,
    pub reporting_manager: String,
    pub projects_completed: u32,
    pub rating: u8,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// The fields a user fills in on the add form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternDraft {
    pub name: String,
    pub duration: String,
    pub department: String,
    pub reporting_manager: String,
    #[serde(default)]
    pub projects_completed: u32,
    pub rating: u8,
    pub comment: String,
}

/// Input-level constraint violations, raised before a submission starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),
    #[error("Rating {0} is outside the range {MIN_RATING}..={MAX_RATING}")]
    RatingOutOfRange(u8),
}

impl InternDraft {
    /// Checks the constraints the add form enforces on its inputs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("name", &self.name),
            ("duration", &self.duration),
            ("department", &self.department),
            ("reportingManager", &self.reporting_manager),
            ("comment", &self.comment),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::EmptyField(*field));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }
        Ok(())
    }

    /// Turns the draft into a record with a fresh id and creation timestamp.
    ///
    /// Ids are random and never checked against existing records.
    pub fn into_record(self, now: DateTime<Utc>) -> InternRecord {
        InternRecord {
            id: Uuid::new_v4().simple().to_string(),
            name: self.name,
            duration: self.duration,
            department: self.department,
            reporting_manager: self.reporting_manager,
            projects_completed: self.projects_completed,
            rating: self.rating,
            comment: self.comment,
            ai_summary: None,
            created_at: now.timestamp_millis(),
        }
    }
}

/// The three screens a client navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    Directory,
    Add,
}

impl View {
    /// The view shown after a record has been added successfully.
    pub fn after_submission() -> Self {
        View::Directory
    }

    /// The HTTP route serving this view.
    pub fn route(self) -> &'static str {
        match self {
            View::Dashboard => "/dashboard",
            View::Directory => "/interns",
            View::Add => "/interns/new",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> InternDraft {
        InternDraft {
            name: "Jane Doe".to_string(),
            duration: "3 Months".to_string(),
            department: "Finance".to_string(),
            reporting_manager: "Omar Haddad".to_string(),
            projects_completed: 2,
            rating: 6,
            comment: "Reliable and quick to learn.".to_string(),
        }
    }

    #[test]
    fn validate_accepts_complete_draft() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_blank_name_and_comment() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::EmptyField("name")));

        let mut d = draft();
        d.comment = String::new();
        assert_eq!(d.validate(), Err(ValidationError::EmptyField("comment")));
    }

    #[test]
    fn validate_rejects_blank_duration_department_and_manager() {
        let mut d = draft();
        d.duration = String::new();
        assert_eq!(d.validate(), Err(ValidationError::EmptyField("duration")));

        let mut d = draft();
        d.department = String::new();
        assert_eq!(d.validate(), Err(ValidationError::EmptyField("department")));

        let mut d = draft();
        d.reporting_manager = "   ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::EmptyField("reportingManager")));
    }

    #[test]
    fn validate_rejects_rating_outside_range() {
        for rating in [0, 11, 255] {
            let mut d = draft();
            d.rating = rating;
            assert_eq!(d.validate(), Err(ValidationError::RatingOutOfRange(rating)));
        }
    }

    #[test]
    fn into_record_assigns_id_and_timestamp() {
        let now = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let a = draft().into_record(now);
        let b = draft().into_record(now);

        assert_eq!(a.created_at, 1_700_000_000_123);
        assert_eq!(a.ai_summary, None);
        assert_eq!(a.name, "Jane Doe");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn submission_returns_to_the_directory() {
        assert_eq!(View::after_submission(), View::Directory);
        assert_eq!(View::after_submission().route(), "/interns");
        assert_eq!(View::Dashboard.route(), "/dashboard");
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let now = DateTime::from_timestamp_millis(42).unwrap();
        let mut record = draft().into_record(now);
        record.id = "abc".to_string();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["reportingManager"], "Omar Haddad");
        assert_eq!(json["projectsCompleted"], 2);
        assert_eq!(json["createdAt"], 42);
        assert!(json.get("aiSummary").is_none());

        record.ai_summary = Some("Solid.".to_string());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["aiSummary"], "Solid.");
    }
}
