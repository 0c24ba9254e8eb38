//! crates/internhub_core/src/summary.rs
//!
//! Turns a record into a summarization prompt and collapses whatever the
//! `SummarizationService` does into a `SummaryOutcome`. Nothing here returns an
//! error to the caller.

use crate::domain::InternRecord;
use crate::ports::{DecodingConfig, SummarizationService, SummaryRequest};
use tracing::{error, warn};

/// Shown when the service answered but produced no text.
pub const EMPTY_SUMMARY_TEXT: &str = "Summary generation failed.";
/// Shown when the call itself failed (network, credentials, service error).
pub const FAILED_SUMMARY_TEXT: &str =
    "Error generating AI summary. Please check connection or API key.";

const PROMPT_TEMPLATE: &str = r#"Please summarize the performance of an intern with the following details for a professional corporate record.
Name: {name}
Department: {department}
Duration: {duration}
Projects Completed: {projects}
Manager Rating: {rating}/10
Manager Comment: {comment}

Provide a concise, professional 2-3 sentence executive summary that highlights their contributions and potential."#;

/// Builds the prompt for one record, embedding its fields verbatim.
pub fn build_prompt(record: &InternRecord) -> String {
    PROMPT_TEMPLATE
        .replace("{name}", &record.name)
        .replace("{department}", &record.department)
        .replace("{duration}", &record.duration)
        .replace("{projects}", &record.projects_completed.to_string())
        .replace("{rating}", &record.rating.to_string())
        .replace("{comment}", &record.comment)
}

/// What happened when we asked for a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Generated(String),
    /// The service responded without usable text.
    Empty,
    /// The call failed; carries the error message for logs and tests.
    Failed(String),
}

impl SummaryOutcome {
    /// The text stored in `aiSummary`.
    pub fn into_display(self) -> String {
        match self {
            SummaryOutcome::Generated(text) => text,
            SummaryOutcome::Empty => EMPTY_SUMMARY_TEXT.to_string(),
            SummaryOutcome::Failed(_) => FAILED_SUMMARY_TEXT.to_string(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, SummaryOutcome::Generated(_))
    }

    /// Short machine-readable name of the outcome.
    pub fn status(&self) -> &'static str {
        match self {
            SummaryOutcome::Generated(_) => "generated",
            SummaryOutcome::Empty => "empty",
            SummaryOutcome::Failed(_) => "failed",
        }
    }
}

/// Requests a summary for `record` with the default decoding configuration.
pub async fn summarize(service: &dyn SummarizationService, record: &InternRecord) -> SummaryOutcome {
    let request = SummaryRequest {
        prompt: build_prompt(record),
        decoding: DecodingConfig::default(),
    };

    match service.generate(&request).await {
        Ok(Some(text)) if !text.trim().is_empty() => SummaryOutcome::Generated(text.trim().to_string()),
        Ok(_) => {
            warn!("Summarization service returned no text for record {}", record.id);
            SummaryOutcome::Empty
        }
        Err(e) => {
            error!("Summarization failed for record {}: {}", record.id, e);
            SummaryOutcome::Failed(e.to_string())
        }
    }
}
