pub mod directory;
pub mod domain;
pub mod ports;
pub mod seed;
pub mod stats;
pub mod store;
pub mod submission;
pub mod summary;

pub use directory::{export_csv, DepartmentFilter, DirectoryQuery, EXPORT_FILENAME};
pub use domain::{InternDraft, InternRecord, ValidationError, View, KNOWN_DEPARTMENTS};
pub use ports::{
    DecodingConfig, KeyValueStore, PortError, PortResult, SummarizationService, SummaryRequest,
};
pub use stats::{DashboardStats, DepartmentCount, PerformanceBand, PerformanceBuckets};
pub use store::{RecordStore, Snapshot, StartupSeed, STORAGE_KEY};
pub use submission::{SubmitError, Submission, Submitter};
pub use summary::{summarize, SummaryOutcome};
