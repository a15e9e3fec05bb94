use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::credentials::Credentials;
use crate::data_models::{SearchRequest, SearchResponse};

/// Error envelope the service returns on failed calls. Deserialized only so
/// the failure can be surfaced verbatim; nothing here classifies or recovers.
#[derive(Debug, Error, Deserialize)]
#[error("search call failed: {status} ({code}): {message}")]
pub struct ApiError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ApiError,
}

pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl SearchClient {
    pub fn new(config: &Config, credentials: Credentials) -> SearchClient {
        SearchClient {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            credentials,
        }
    }

    /// Exactly one call. No retry, no backoff, no timeout; whatever the
    /// service signals comes back to the caller as-is.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        if self.credentials.is_expired() {
            log::warn!("access token looks expired, sending the call anyway");
        }

        let url = format!("{}/v2/{}:search", self.endpoint, request.placement);
        log::info!("searching placement: {}", request.placement);

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.credentials.bearer_token())
            .json(request)
            .send()
            .await
            .context("search request could not be sent")?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<SearchResponse>()
                .await
                .context("search response body did not deserialize")
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(surface_error(status, body))
        }
    }
}

fn surface_error(status: StatusCode, body: String) -> anyhow::Error {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(envelope) => anyhow::Error::new(envelope.error),
        Err(_) => anyhow::anyhow!("search call failed: HTTP {status}: {body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_error_keeps_the_service_envelope() {
        let body = r#"{"error": {"code": 403, "message": "Caller lacks permission", "status": "PERMISSION_DENIED"}}"#;
        let err = surface_error(StatusCode::FORBIDDEN, body.to_string());
        let rendered = format!("{err}");
        assert!(rendered.contains("PERMISSION_DENIED"));
        assert!(rendered.contains("403"));
        assert!(rendered.contains("Caller lacks permission"));
    }

    #[test]
    fn test_surface_error_falls_back_to_raw_body() {
        let err = surface_error(StatusCode::BAD_GATEWAY, "upstream hiccup".to_string());
        let rendered = format!("{err}");
        assert!(rendered.contains("HTTP 502"));
        assert!(rendered.contains("upstream hiccup"));
    }
}
