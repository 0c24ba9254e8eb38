//! crates/internhub_core/src/submission.rs
//!
//! The add-record flow: validate the draft, enrich it with a summary, then
//! insert it. A record is never visible in the store before its summary is set.

use crate::domain::{InternDraft, InternRecord, ValidationError};
use crate::ports::SummarizationService;
use crate::store::RecordStore;
use crate::summary::{summarize, SummaryOutcome};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Invalid record: {0}")]
    Invalid(#[from] ValidationError),
    #[error("Another submission is still in progress")]
    Busy,
}

/// The result of a successful submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub record: InternRecord,
    pub outcome: SummaryOutcome,
}

/// Runs submissions one at a time.
///
/// The busy flag mirrors the disabled submit button on the add form; it keeps
/// a double submit from racing but the store itself does not depend on it.
#[derive(Debug, Default)]
pub struct Submitter {
    busy: AtomicBool,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Submitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn acquire(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(&self.busy))
    }

    pub async fn submit(
        &self,
        draft: InternDraft,
        service: &dyn SummarizationService,
        store: &RecordStore,
        now: DateTime<Utc>,
    ) -> Result<Submission, SubmitError> {
        draft.validate()?;
        let _guard = self.acquire().ok_or(SubmitError::Busy)?;

        let mut record = draft.into_record(now);
        let outcome = summarize(service, &record).await;
        record.ai_summary = Some(outcome.clone().into_display());

        store.insert(record.clone());
        info!(
            "Added record {} for '{}' (summary generated: {})",
            record.id,
            record.name,
            outcome.is_generated()
        );

        Ok(Submission { record, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{KeyValueStore, PortError, PortResult, SummaryRequest};
    use crate::store::StartupSeed;
    use crate::summary::FAILED_SUMMARY_TEXT;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tokio::sync::Notify;

    struct NullKv;

    impl KeyValueStore for NullKv {
        fn load(&self, _key: &str) -> PortResult<Option<String>> {
            Ok(None)
        }
        fn save(&self, _key: &str, _value: &str) -> PortResult<()> {
            Ok(())
        }
    }

    struct Fixed(Option<&'static str>);

    #[async_trait]
    impl SummarizationService for Fixed {
        async fn generate(&self, _request: &SummaryRequest) -> PortResult<Option<String>> {
            match self.0 {
                Some(text) => Ok(Some(text.to_string())),
                None => Err(PortError::Unexpected("no api key".to_string())),
            }
        }
    }

    /// Blocks until released, so a test can observe the in-flight state.
    struct Gated {
        started: Notify,
        release: Notify,
    }

    #[async_trait]
    impl SummarizationService for Gated {
        async fn generate(&self, _request: &SummaryRequest) -> PortResult<Option<String>> {
            self.started.notify_one();
            self.release.notified().await;
            Ok(Some("Done.".to_string()))
        }
    }

    fn draft(name: &str) -> InternDraft {
        InternDraft {
            name: name.to_string(),
            duration: "3 Months".to_string(),
            department: "Engineering".to_string(),
            reporting_manager: "Alex Rivera".to_string(),
            projects_completed: 3,
            rating: 7,
            comment: "Steady progress.".to_string(),
        }
    }

    fn empty_store() -> RecordStore {
        RecordStore::initialize(Arc::new(NullKv), StartupSeed::Empty)
    }

    #[tokio::test]
    async fn submitted_record_is_enriched_then_inserted() {
        let store = empty_store();
        let submitter = Submitter::new();

        let submission = submitter
            .submit(draft("Jane Doe"), &Fixed(Some("Great intern.")), &store, Utc::now())
            .await
            .unwrap();

        assert_eq!(submission.record.ai_summary.as_deref(), Some("Great intern."));
        assert_eq!(store.snapshot()[0], submission.record);
        assert!(!submitter.is_busy());
    }

    #[tokio::test]
    async fn failed_summary_still_saves_record_with_fallback() {
        let store = empty_store();
        let submission = Submitter::new()
            .submit(draft("Jane Doe"), &Fixed(None), &store, Utc::now())
            .await
            .unwrap();

        assert!(matches!(submission.outcome, SummaryOutcome::Failed(_)));
        assert_eq!(store.snapshot()[0].ai_summary.as_deref(), Some(FAILED_SUMMARY_TEXT));
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_before_any_call() {
        let store = empty_store();
        let mut bad = draft("Jane Doe");
        bad.rating = 0;

        let err = Submitter::new()
            .submit(bad, &Fixed(Some("unused")), &store, Utc::now())
            .await
            .unwrap_err();

        assert_eq!(err, SubmitError::Invalid(ValidationError::RatingOutOfRange(0)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn second_submission_is_refused_while_first_is_in_flight() {
        let store = Arc::new(empty_store());
        let submitter = Arc::new(Submitter::new());
        let service = Arc::new(Gated { started: Notify::new(), release: Notify::new() });

        let first = {
            let (store, submitter, service) = (store.clone(), submitter.clone(), service.clone());
            tokio::spawn(async move {
                submitter
                    .submit(draft("First"), service.as_ref(), &store, Utc::now())
                    .await
            })
        };
        service.started.notified().await;

        assert!(submitter.is_busy());
        assert!(store.is_empty());
        let second = submitter
            .submit(draft("Second"), &Fixed(Some("x")), &store, Utc::now())
            .await;
        assert_eq!(second.unwrap_err(), SubmitError::Busy);

        service.release.notify_one();
        let first = first.await.unwrap().unwrap();
        assert_eq!(first.record.name, "First");
        assert_eq!(store.len(), 1);
        assert!(!submitter.is_busy());
    }
}
