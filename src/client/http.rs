use super::{ClientError, FilterForm};
use crate::constants::DEFAULT_CLIENT_TIMEOUT_SECONDS;
use crate::models::Recommendation;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Clears the in-flight flag however the request ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// HTTP client for the recommendation service.
///
/// Allows one outstanding `recommend` call at a time; a second submission
/// while the first is pending fails with [`ClientError::Busy`].
pub struct RecommendClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    in_flight: AtomicBool,
}

impl RecommendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_CLIENT_TIMEOUT_SECONDS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        RecommendClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the form and return the matching destinations.
    pub async fn recommend(&self, form: &FilterForm) -> Result<Vec<Recommendation>, ClientError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(ClientError::Busy);
        }
        let _guard = InFlight(&self.in_flight);

        let url = format!("{}/recommend", self.base_url);
        tracing::debug!(url = %url, "Submitting recommendation request");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&form.to_request())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let response = check_status(response).await?;
        response
            .json::<Vec<Recommendation>>()
            .await
            .map_err(|e| self.decode_error(e))
    }

    /// True when the service answers its health probe.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        Ok(response.status().is_success())
    }

    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(self.timeout.as_secs())
        } else {
            ClientError::Transport(e.to_string())
        }
    }

    fn decode_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(self.timeout.as_secs())
        } else {
            ClientError::Decode(e.to_string())
        }
    }
}

/// Map a non-2xx response to the server's `error` message, or a generic
/// message naming the status when the body has none.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()));

    tracing::warn!(status = status.as_u16(), "Recommendation request failed: {}", message);
    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}
