//! HTTP client for the items API.

pub mod health;
pub mod items;

use items_core::item::ErrorResponse;

use crate::error::{ClientError, Result};

/// HTTP client for the items API.
#[derive(Debug, Clone)]
pub struct ItemsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ItemsClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(error_for_status(status.as_u16(), &body))
    }
}

/// Classifies a non-2xx response, preferring the server's `detail` message.
fn error_for_status(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|err| err.detail)
        .unwrap_or_else(|_| body.to_string());

    match status {
        404 => ClientError::NotFound { message },
        400 | 422 => ClientError::Validation { message },
        _ => ClientError::ServerError { status, message },
    }
}
