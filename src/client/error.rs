//! Error types for the health frontend.
//!
//! Errors are grouped by where they originate: compile-time configuration, the
//! health records API, and the browser's local storage. `ClientError` aggregates
//! them so store operations can propagate any of them with `?`.

use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS, aborted).
    #[error("Failed to send request: {0}")]
    RequestFailed(String),
    /// The API answered with a non-success status code.
    ///
    /// `body` is the raw response text, kept for logs only. `detail` is the
    /// API's own explanation when the body was a JSON object carrying one.
    #[error("Request failed with status {status}: {body}")]
    Status {
        status: u16,
        detail: Option<String>,
        body: String,
    },
    /// The response body could not be decoded into the expected type.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// Login succeeded at the HTTP level but the tokens were missing.
    #[error("Malformed response from API, missing access or refresh token")]
    MalformedResponse,
    #[error("No refresh token available")]
    MissingRefreshToken,
    #[error("Not logged in")]
    NotAuthenticated,
}

impl ApiError {
    /// Build a status error from a response body, extracting its `detail`.
    pub fn from_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorDto>(body)
            .ok()
            .map(|error_dto| error_dto.detail)
            .filter(|detail| !detail.trim().is_empty());

        Self::Status {
            status,
            detail,
            body: body.trim().to_string(),
        }
    }

    /// Message reported by the API itself, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => Some(detail),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Main error type for the health frontend.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Serialization of a value written to local storage failed.
    #[error("Failed to serialize stored value: {0}")]
    StorageError(#[from] serde_json::Error),
}

impl ClientError {
    /// Text shown to the user when an operation fails.
    ///
    /// Prefers the API's own explanation and falls back to `default` so
    /// internal details are not leaked into the page.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            Self::ApiError(err) => err
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| default.to_string()),
            _ => default.to_string(),
        }
    }
}
