//! Client for the health records REST API.
//!
//! [`HttpApi`] is the only transport. Each group of endpoints is a trait so
//! stores can be driven by a fake in tests.

pub mod auth;
pub mod health;
pub mod records;

use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::client::{config::ClientConfig, error::ApiError};

pub use auth::AuthApi;
pub use health::HealthStatus;
pub use records::RecordsApi;

/// Health records API over HTTP using the browser's fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn request(&self, request: Request, token: Option<&str>) -> Request {
        let request = request.credentials(RequestCredentials::Include);

        match token {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let request = self.request(Request::get(&self.config.endpoint(path)), token);

        parse_response(self.send(request).await?).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;

        let request = self
            .request(Request::post(&self.config.endpoint(path)), None)
            .header("Content-Type", "application/json")
            .body(body);

        parse_response(self.send(request).await?).await
    }

    pub(crate) async fn delete(&self, path: &str, token: &str) -> Result<(), ApiError> {
        let request = self.request(Request::delete(&self.config.endpoint(path)), Some(token));

        parse_empty(self.send(request).await?).await
    }
}

/// Decode a response, mapping non-success statuses to [`ApiError::Status`].
pub(crate) async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if is_success(status) {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    Err(error_from_response(status, response).await)
}

/// Check the status of a response whose body is not needed, such as `204 No Content`.
pub(crate) async fn parse_empty(response: Response) -> Result<(), ApiError> {
    let status = response.status();

    if is_success(status) {
        return Ok(());
    }

    Err(error_from_response(status, response).await)
}

async fn error_from_response(status: u16, response: Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();

    ApiError::from_body(status, &body)
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
