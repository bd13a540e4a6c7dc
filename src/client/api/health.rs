use dioxus_logger::tracing;

use crate::{
    client::{api::HttpApi, error::ApiError},
    model::api::HealthDto,
};

/// Outcome of checking the API's `health/` endpoint.
#[derive(Clone, Debug, PartialEq)]
pub enum HealthStatus {
    Healthy(String),
    Unhealthy(String),
}

impl HealthStatus {
    pub fn from_result(result: Result<HealthDto, ApiError>) -> Self {
        match result {
            Ok(health) if health.status == "healthy" => Self::Healthy(health.message),
            Ok(health) => Self::Unhealthy(format!("API reported status \"{}\"", health.status)),
            Err(err) => {
                tracing::warn!("Health check failed: {}", err);

                Self::Unhealthy(
                    err.detail()
                        .map(str::to_string)
                        .unwrap_or_else(|| "API is unreachable".to_string()),
                )
            }
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy(_))
    }
}

impl HttpApi {
    /// `GET health/`, no authentication required
    pub async fn health(&self) -> HealthStatus {
        HealthStatus::from_result(self.get_json("health/", None).await)
    }
}
