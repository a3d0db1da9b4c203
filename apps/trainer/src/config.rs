//! Environment-driven configuration.

use std::env;
use std::time::Duration;

use crate::feed::DEFAULT_DEBOUNCE;

/// Base URL used when VOCAB_API_URL is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Trainer configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote vocabulary API.
    pub api_base_url: String,
    /// Quiet period before a search edit triggers a fetch.
    pub debounce: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("VOCAB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let debounce = env::var("VOCAB_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE);

        Self {
            api_base_url,
            debounce,
        }
    }
}
