//! services/api/src/adapters/summary_llm.rs
//!
//! This module contains the adapters for the record-summarizing LLM.
//! They implement the `SummarizationService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::responses::CreateResponseArgs,
    Client,
};
use async_trait::async_trait;
use internhub_core::ports::{PortError, PortResult, SummarizationService, SummaryRequest};
use tracing::debug;

const SYSTEM_INSTRUCTIONS: &str = "You write short performance summaries for an HR record system. Answer with the summary text only.";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `SummarizationService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiSummaryAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiSummaryAdapter {
    /// Creates a new `OpenAiSummaryAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }
}

//=========================================================================================
// `SummarizationService` Trait Implementations
//=========================================================================================

#[async_trait]
impl SummarizationService for OpenAiSummaryAdapter {
    /// Sends the prompt once through the Responses API. No retries.
    async fn generate(&self, request: &SummaryRequest) -> PortResult<Option<String>> {
        // The Responses API has no top-k parameter.
        debug!(
            "Requesting summary from {} (temperature {}, top_p {}, top_k {} not sent)",
            self.model, request.decoding.temperature, request.decoding.top_p, request.decoding.top_k
        );

        let api_request = CreateResponseArgs::default()
            .model(&self.model)
            .instructions(SYSTEM_INSTRUCTIONS)
            .input(request.prompt.clone())
            .temperature(request.decoding.temperature)
            .top_p(request.decoding.top_p)
            .max_output_tokens(300u32)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error, which respects the orphan rule.
        let response = self
            .client
            .responses()
            .create(api_request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        Ok(response.output_text().filter(|text| !text.trim().is_empty()))
    }
}

/// Stands in when no API key is configured, so a missing key shows up as a
/// failed summary rather than a startup error.
#[derive(Clone, Debug, Default)]
pub struct UnconfiguredSummaryAdapter;

#[async_trait]
impl SummarizationService for UnconfiguredSummaryAdapter {
    async fn generate(&self, _request: &SummaryRequest) -> PortResult<Option<String>> {
        Err(PortError::Unexpected(
            "No API key configured for the summarization service".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use internhub_core::ports::DecodingConfig;

    #[tokio::test]
    async fn unconfigured_adapter_always_fails() {
        let request = SummaryRequest {
            prompt: "Summarize".to_string(),
            decoding: DecodingConfig::default(),
        };
        let err = UnconfiguredSummaryAdapter.generate(&request).await.unwrap_err();
        assert!(err.to_string().contains("No API key"));
    }
}
