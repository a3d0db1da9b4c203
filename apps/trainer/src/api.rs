//! HTTP client for the remote vocabulary API.

use async_trait::async_trait;
use reqwest::Client;
use vocab_core::{LevelFilter, VocabCard};

/// Fetch errors, tagged so callers can tell transport failures from server
/// responses; the rendered message is what reaches the UI.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Anything that can list vocabulary cards for a level/query filter.
///
/// The feed depends on this seam instead of the HTTP client so tests can
/// inject a scripted source.
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn fetch(&self, level: LevelFilter, query: &str) -> Result<Vec<VocabCard>, FetchError>;
}

/// Client for the remote vocabulary list endpoint.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET {base}/flashcards`, with `level` appended only for a concrete
    /// HSK tier and `query` only when non-empty. No retries, no caching,
    /// no timeout.
    pub async fn fetch_flashcards(
        &self,
        level: LevelFilter,
        query: &str,
    ) -> Result<Vec<VocabCard>, FetchError> {
        let url = format!("{}/flashcards", self.base_url);

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(level) = level.as_param() {
            params.push(("level", level.to_string()));
        }
        if !query.is_empty() {
            params.push(("query", query.to_string()));
        }

        let mut request = self.client.get(&url);
        if !params.is_empty() {
            request = request.query(&params);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(FetchError::Server { status, message });
        }

        resp.json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CardSource for ApiClient {
    async fn fetch(&self, level: LevelFilter, query: &str) -> Result<Vec<VocabCard>, FetchError> {
        self.fetch_flashcards(level, query).await
    }
}
