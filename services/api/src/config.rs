//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use internhub_core::StartupSeed;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Where the persisted record blob lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    /// One JSON file per key under the data directory.
    File,
    /// Kept in process memory; lost on restart.
    Memory,
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub data_dir: PathBuf,
    pub store_backend: StoreBackend,
    pub startup_seed: StartupSeed,
    pub openai_api_key: Option<String>,
    pub openai_api_base: Option<String>,
    pub summary_model: String,
    pub cors_origin: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Server Settings ---
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let cors_origin =
            lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:3000".to_string());

        // --- Storage Settings ---
        let data_dir = lookup("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));

        let store_backend = match lookup("STORE_BACKEND")
            .unwrap_or_else(|| "file".to_string())
            .to_lowercase()
            .as_str()
        {
            "file" => StoreBackend::File,
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::InvalidValue(
                    "STORE_BACKEND".to_string(),
                    format!("'{}' is not one of 'file' or 'memory'", other),
                ))
            }
        };

        let startup_seed = match lookup("SEED_EXAMPLES") {
            None => StartupSeed::Examples,
            Some(value) => match value.to_lowercase().as_str() {
                "true" | "1" | "yes" => StartupSeed::Examples,
                "false" | "0" | "no" => StartupSeed::Empty,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "SEED_EXAMPLES".to_string(),
                        format!("'{}' is not a boolean", value),
                    ))
                }
            },
        };

        // --- Summarization Settings (the key is optional) ---
        let openai_api_key = lookup("OPENAI_API_KEY").filter(|k| !k.is_empty());
        let openai_api_base = lookup("OPENAI_API_BASE").filter(|b| !b.is_empty());
        let summary_model =
            lookup("SUMMARY_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string());

        Ok(Self {
            bind_address,
            log_level,
            data_dir,
            store_backend,
            startup_seed,
            openai_api_key,
            openai_api_base,
            summary_model,
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.store_backend, StoreBackend::File);
        assert_eq!(config.startup_seed, StartupSeed::Examples);
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.summary_model, "gpt-4o-mini");
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("RUST_LOG", "debug"),
            ("STORE_BACKEND", "Memory"),
            ("SEED_EXAMPLES", "false"),
            ("OPENAI_API_KEY", "sk-test"),
            ("SUMMARY_MODEL", "gpt-4o"),
        ])
        .unwrap();
        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.startup_seed, StartupSeed::Empty);
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.summary_model, "gpt-4o");
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let config = load(&[("OPENAI_API_KEY", "")]).unwrap();
        assert_eq!(config.openai_api_key, None);
    }

    #[test]
    fn rejects_invalid_values() {
        for (key, value) in [
            ("BIND_ADDRESS", "not-an-address"),
            ("RUST_LOG", "loud"),
            ("STORE_BACKEND", "postgres"),
            ("SEED_EXAMPLES", "maybe"),
        ] {
            match load(&[(key, value)]) {
                Err(ConfigError::InvalidValue(name, _)) => assert_eq!(name, key),
                other => panic!("expected InvalidValue for {key}, got {other:?}"),
            }
        }
    }
}
