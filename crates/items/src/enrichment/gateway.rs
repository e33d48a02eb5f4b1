//! Read-through enrichment of stored items.

use std::{sync::Arc, time::Duration};

use items_core::enrichment::{EnrichmentOutcome, EnrichmentResult, EnrichmentSource};
use items_core::item::ItemId;
use items_core::storage::{ItemRepository, RepositoryError};

/// Looks up an item and augments it with data from an [`EnrichmentSource`].
///
/// Source failures never fail the call: they turn into
/// [`EnrichmentOutcome::Fallback`]. Nothing is written back to the store.
#[derive(Clone)]
pub struct EnrichmentGateway {
    items: Arc<dyn ItemRepository>,
    source: Arc<dyn EnrichmentSource>,
    delay: Duration,
}

impl EnrichmentGateway {
    /// Creates a gateway. `delay` is awaited before every outbound call.
    pub fn new(
        items: Arc<dyn ItemRepository>,
        source: Arc<dyn EnrichmentSource>,
        delay: Duration,
    ) -> Self {
        Self {
            items,
            source,
            delay,
        }
    }

    /// Enriches the item with the given ID.
    ///
    /// Fails only when the lookup fails (`NotFound` or a store error); in
    /// that case the source is not called.
    pub async fn enrich(&self, id: ItemId) -> Result<EnrichmentResult, RepositoryError> {
        let item = self
            .items
            .get_item(id)
            .await?
            .ok_or_else(|| RepositoryError::item_not_found(id))?;

        // Yields to the runtime; other requests keep running meanwhile.
        tokio::time::sleep(self.delay).await;

        let outcome = EnrichmentOutcome::from(self.source.fetch(&item.name).await);

        match &outcome {
            EnrichmentOutcome::Fetched(payload) => {
                tracing::debug!(item_id = id, keys = payload.len(), "Enrichment fetched");
            }
            EnrichmentOutcome::Fallback(reason) => {
                tracing::warn!(item_id = id, reason = %reason, "Enrichment source unavailable, using fallback");
            }
        }

        Ok(EnrichmentResult { item, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{MemoryRepository, StaticSource};
    use items_core::enrichment::{fallback_payload, EnrichmentPayload, UpstreamUnavailable};
    use items_core::item::NewItem;
    use serde_json::json;
    use tokio::time::Instant;

    const DELAY: Duration = Duration::from_secs(2);

    fn payload() -> EnrichmentPayload {
        match json!({ "category": "lighting" }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn gateway_with(source: Arc<StaticSource>) -> (EnrichmentGateway, Arc<MemoryRepository>) {
        let repo = Arc::new(MemoryRepository::default());
        let gateway = EnrichmentGateway::new(repo.clone(), source, DELAY);
        (gateway, repo)
    }

    #[tokio::test(start_paused = true)]
    async fn test_enrich_missing_item_skips_source() {
        let source = Arc::new(StaticSource::ok(payload()));
        let (gateway, _repo) = gateway_with(source.clone());

        let result = gateway.enrich(999).await;

        assert_eq!(result, Err(RepositoryError::item_not_found(999)));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enrich_uses_fetched_payload() {
        let source = Arc::new(StaticSource::ok(payload()));
        let (gateway, repo) = gateway_with(source.clone());
        let id = repo.create_item(&NewItem::new("Lamp")).await.unwrap();

        let result = gateway.enrich(id).await.unwrap();

        assert_eq!(result.item.name, "Lamp");
        assert_eq!(result.outcome, EnrichmentOutcome::Fetched(payload()));
        assert_eq!(source.calls(), 1);
        assert_eq!(source.last_name().as_deref(), Some("Lamp"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_enrich_falls_back_when_source_fails() {
        let source = Arc::new(StaticSource::failing(UpstreamUnavailable::Timeout));
        let (gateway, repo) = gateway_with(source);
        let new_item = NewItem::new("Lamp").with_price(30.0);
        let id = repo.create_item(&new_item).await.unwrap();

        let result = gateway.enrich(id).await.unwrap();

        assert_eq!(
            result.outcome,
            EnrichmentOutcome::Fallback(UpstreamUnavailable::Timeout)
        );
        let body = result.into_response();
        assert_eq!(body.item, new_item.into_item(id));
        assert_eq!(body.enriched, fallback_payload());
    }

    #[tokio::test(start_paused = true)]
    async fn test_enrich_does_not_modify_item() {
        let source = Arc::new(StaticSource::ok(payload()));
        let (gateway, repo) = gateway_with(source);
        let id = repo
            .create_item(&NewItem::new("Lamp").with_description("Desk"))
            .await
            .unwrap();
        let before = repo.get_item(id).await.unwrap();

        gateway.enrich(id).await.unwrap();

        assert_eq!(repo.get_item(id).await.unwrap(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enrich_waits_for_delay() {
        let source = Arc::new(StaticSource::ok(payload()));
        let (gateway, repo) = gateway_with(source);
        let id = repo.create_item(&NewItem::new("Lamp")).await.unwrap();

        let start = Instant::now();
        gateway.enrich(id).await.unwrap();

        assert!(start.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_enrichments_overlap() {
        let source = Arc::new(StaticSource::ok(payload()));
        let (gateway, repo) = gateway_with(source.clone());
        let a = repo.create_item(&NewItem::new("A")).await.unwrap();
        let b = repo.create_item(&NewItem::new("B")).await.unwrap();

        let start = Instant::now();
        let (first, second) = tokio::join!(gateway.enrich(a), gateway.enrich(b));

        assert!(first.is_ok() && second.is_ok());
        assert!(start.elapsed() < DELAY * 2);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_reads_proceed_during_delay() {
        let source = Arc::new(StaticSource::ok(payload()));
        let (gateway, repo) = gateway_with(source);
        let id = repo.create_item(&NewItem::new("Lamp")).await.unwrap();

        let enrich = tokio::spawn({
            let gateway = gateway.clone();
            async move { gateway.enrich(id).await }
        });
        tokio::task::yield_now().await;

        let start = Instant::now();
        let items = repo.list_items(None).await.unwrap();

        assert_eq!(items.len(), 1);
        assert!(start.elapsed() < DELAY);
        assert!(!enrich.is_finished());
        assert!(enrich.await.unwrap().is_ok());
    }
}
