//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{
        FileKeyValueStore, MemoryKeyValueStore, OpenAiSummaryAdapter, UnconfiguredSummaryAdapter,
    },
    config::{Config, StoreBackend},
    error::ApiError,
    web::{router, state::AppState},
};
use async_openai::{config::OpenAIConfig, Client};
use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use internhub_core::ports::{KeyValueStore, SummarizationService};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Select the Persistence Backend ---
    let kv: Arc<dyn KeyValueStore> = match config.store_backend {
        StoreBackend::File => {
            info!("Persisting records under {}", config.data_dir.display());
            Arc::new(FileKeyValueStore::new(config.data_dir.clone()))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory storage; records are lost on restart");
            Arc::new(MemoryKeyValueStore::new())
        }
    };

    // --- 3. Initialize the Summarization Adapter ---
    // A missing key is not an error here; it shows up as failed summaries.
    let summarizer: Arc<dyn SummarizationService> = match &config.openai_api_key {
        Some(api_key) => {
            let mut openai_config = OpenAIConfig::new().with_api_key(api_key);
            if let Some(api_base) = &config.openai_api_base {
                openai_config = openai_config.with_api_base(api_base);
            }
            Arc::new(OpenAiSummaryAdapter::new(
                Client::with_config(openai_config),
                config.summary_model.clone(),
            ))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; summaries will fall back to an error message");
            Arc::new(UnconfiguredSummaryAdapter)
        }
    };

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState::new(&config, kv, summarizer));
    info!("Record store ready with {} records", app_state.store.len());

    let cors_origin = config.cors_origin.parse::<HeaderValue>().map_err(|e| {
        ApiError::Internal(format!("Invalid CORS origin '{}': {}", config.cors_origin, e))
    })?;
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    // --- 5. Create the Web Router ---
    let app = router(app_state).layer(cors);

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
