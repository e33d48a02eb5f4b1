use async_trait::async_trait;

use super::{EnrichmentPayload, UpstreamUnavailable};

/// An external source of enrichment data.
#[async_trait]
pub trait EnrichmentSource: Send + Sync {
    /// Fetches enrichment data for an item name.
    async fn fetch(&self, name: &str) -> Result<EnrichmentPayload, UpstreamUnavailable>;
}
