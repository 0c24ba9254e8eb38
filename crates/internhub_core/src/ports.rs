//! crates/internhub_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like storage or LLM APIs.

use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., filesystem, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Value Types Crossing the Ports
//=========================================================================================

/// Sampling parameters sent with every summarization request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodingConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for DecodingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
        }
    }
}

/// A single text-generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub prompt: String,
    pub decoding: DecodingConfig,
}

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// A string-keyed blob store holding the serialized record collection.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing was ever saved.
    fn load(&self, key: &str) -> PortResult<Option<String>>;

    /// Replaces the value stored under `key`.
    fn save(&self, key: &str, value: &str) -> PortResult<()>;
}

#[async_trait]
pub trait SummarizationService: Send + Sync {
    /// Sends one generation request.
    ///
    /// `Ok(None)` means the service answered without any text.
    async fn generate(&self, request: &SummaryRequest) -> PortResult<Option<String>>;
}
