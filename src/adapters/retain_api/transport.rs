//! Request plumbing shared by the gateway and the dashboard client.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::dto::error_detail;
use crate::ports::{DashboardError, GatewayError};

/// Failure of one HTTP exchange, before it is mapped to a port error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum HttpFailure {
    Timeout { timeout_secs: u64 },
    Transport(String),
    Status { status: u16, detail: String },
    Decode(String),
}

impl From<HttpFailure> for GatewayError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Timeout { timeout_secs } => GatewayError::timeout(timeout_secs),
            HttpFailure::Transport(message) => GatewayError::transport(message),
            HttpFailure::Status { status, detail } => GatewayError::service(status, detail),
            HttpFailure::Decode(message) => GatewayError::invalid_response(message),
        }
    }
}

impl From<HttpFailure> for DashboardError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Timeout { timeout_secs } => DashboardError::Timeout { timeout_secs },
            HttpFailure::Transport(message) => DashboardError::transport(message),
            HttpFailure::Status { status, detail } => DashboardError::service(status, detail),
            HttpFailure::Decode(message) => DashboardError::invalid_response(message),
        }
    }
}

/// Sends the request and rejects non-success statuses.
pub(super) async fn send(request: RequestBuilder, timeout_secs: u64) -> Result<Response, HttpFailure> {
    let response = request
        .send()
        .await
        .map_err(|e| classify(&e, timeout_secs))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(HttpFailure::Status {
        status: status.as_u16(),
        detail: error_detail(&body),
    })
}

/// Decodes a JSON body.
pub(super) async fn json<T: DeserializeOwned>(response: Response, timeout_secs: u64) -> Result<T, HttpFailure> {
    let body = response
        .text()
        .await
        .map_err(|e| classify(&e, timeout_secs))?;
    serde_json::from_str(&body)
        .map_err(|e| HttpFailure::Decode(format!("Failed to parse response: {}", e)))
}

/// Reads a text body.
pub(super) async fn text(response: Response, timeout_secs: u64) -> Result<String, HttpFailure> {
    response
        .text()
        .await
        .map_err(|e| classify(&e, timeout_secs))
}

fn classify(e: &reqwest::Error, timeout_secs: u64) -> HttpFailure {
    if e.is_timeout() {
        HttpFailure::Timeout { timeout_secs }
    } else if e.is_connect() {
        HttpFailure::Transport(format!("Connection failed: {}", e))
    } else if e.is_decode() {
        HttpFailure::Decode(e.to_string())
    } else {
        HttpFailure::Transport(e.to_string())
    }
}
