//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use internhub_core::{
    ports::{KeyValueStore, SummarizationService},
    RecordStore, Submitter,
};
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub submitter: Arc<Submitter>,
    pub summarizer: Arc<dyn SummarizationService>,
}

impl AppState {
    /// Restores the record store from `kv` and wires the summarization adapter in.
    pub fn new(
        config: &Config,
        kv: Arc<dyn KeyValueStore>,
        summarizer: Arc<dyn SummarizationService>,
    ) -> Self {
        let store = Arc::new(RecordStore::initialize(kv, config.startup_seed));
        Self {
            store,
            submitter: Arc::new(Submitter::new()),
            summarizer,
        }
    }
}
