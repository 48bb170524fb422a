use std::error::Error as StdError;
use std::fmt;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::{UpstreamPage, UpstreamPlayer, UpstreamSeasonAverages};

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("BALLDONTLIE_API_KEY is not set")]
    MissingApiKey,
    #[error("request to upstream failed: {}", error_chain(.0))]
    Request(#[source] reqwest::Error),
    #[error("upstream responded with {status}")]
    Status { status: StatusCode, body: Value },
    #[error("failed to decode upstream response: {}", error_chain(.0))]
    Decode(#[source] reqwest::Error),
}

/// An error's message followed by each of its sources, joined by ": ".
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // reqwest sometimes repeats the inner message in its own
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl UpstreamError {
    /// Payload reported to callers under `details`: the upstream's own error body
    /// when it sent one, otherwise the failure message.
    pub fn details(&self) -> Value {
        match self {
            UpstreamError::Status { body, .. } if !body.is_null() => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

/// Client for the balldontlie NBA API
#[derive(Clone)]
pub struct BallDontLieClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl fmt::Debug for BallDontLieClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BallDontLieClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl BallDontLieClient {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// GET /players?search= (first page only)
    pub async fn search_players(&self, search: &str) -> Result<Vec<UpstreamPlayer>, UpstreamError> {
        let page: UpstreamPage<UpstreamPlayer> = self.get("players", &[("search", search)]).await?;
        Ok(page.into_records())
    }

    /// GET /season_averages?season=&player_ids[]= and keep the single expected record
    pub async fn season_averages(
        &self,
        season: &str,
        player_id: &str,
    ) -> Result<Option<UpstreamSeasonAverages>, UpstreamError> {
        let page: UpstreamPage<UpstreamSeasonAverages> = self
            .get("season_averages", &[("season", season), ("player_ids[]", player_id)])
            .await?;
        Ok(page.into_records().into_iter().next())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(UpstreamError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status,
                body: error_body(status, response.text().await),
            });
        }

        response.json::<T>().await.map_err(UpstreamError::Decode)
    }
}

/// Keep a JSON error body as-is, fall back to the raw text or the status line.
fn error_body(status: StatusCode, text: Result<String, reqwest::Error>) -> Value {
    let text = match text {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(%status, "Failed to read upstream error body: {}", error_chain(&e));
            String::new()
        }
    };
    if text.trim().is_empty() {
        return Value::String(status.to_string());
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
