use serde::{Deserialize, Serialize};

/// The body returned by the health records API when a request fails
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    /// Human readable reason for the failure
    pub detail: String,
}

/// Body of `GET health/`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthDto {
    pub status: String,
    #[serde(default)]
    pub message: String,
}
