//! Health check operations.

use super::ItemsClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Server liveness status.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

impl ItemsClient {
    /// Check server liveness.
    pub async fn health(&self) -> Result<Health> {
        let response = self.client.get(self.url("/health")).send().await?;
        self.handle_response(response).await
    }
}
