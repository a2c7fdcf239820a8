//! API utilities for frontend-backend communication
//!
//! Error type shared by all HTTP clients and helpers to turn a
//! `gloo_net` response into it.

use contracts::shared::api::ApiErrorBody;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Failed to send request: {0}")]
    Network(String),
    /// Non-2xx response. `detail` comes from the JSON error body.
    #[error("HTTP {status}{}", .detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },
    /// 2xx response whose body did not match the contract.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        ApiError::Network(err.to_string())
    }

    /// Message suitable for showing to the user.
    ///
    /// A status error without a server-provided detail yields `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status { detail: None, .. } => fallback.to_string(),
            ApiError::Network(msg) | ApiError::Decode(msg) => msg.clone(),
        }
    }
}

/// Returns the response if it is 2xx, otherwise a [`ApiError::Status`]
/// carrying the body's `detail`, if any.
pub async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.message(),
        Err(_) => None,
    };
    Err(ApiError::Status { status, detail })
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
