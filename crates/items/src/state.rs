//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The store handle is built once at startup and owned
//! here; there is no process-wide connection.

use std::sync::Arc;

use items_core::enrichment::EnrichmentSource;
use items_core::storage::ItemRepository;

use crate::config::Config;
use crate::enrichment::{EnrichmentGateway, HttpEnrichmentSource};
use crate::storage::SqliteRepository;

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources
/// including repository trait objects for database access.
#[derive(Clone)]
pub struct AppState {
    /// Item repository.
    pub item_repo: Arc<dyn ItemRepository>,
    /// Enrichment gateway, reading through `item_repo`.
    pub enrichment: EnrichmentGateway,
}

impl AppState {
    /// Creates an AppState from an item repository and an enrichment source.
    pub(crate) fn build(
        item_repo: Arc<dyn ItemRepository>,
        source: Arc<dyn EnrichmentSource>,
        config: &Config,
    ) -> Self {
        let enrichment = EnrichmentGateway::new(item_repo.clone(), source, config.enrich_delay());

        Self {
            item_repo,
            enrichment,
        }
    }

    /// Creates AppState with SQLite storage and the HTTP enrichment source.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
        let source = Arc::new(HttpEnrichmentSource::new(
            &config.enrich_url,
            config.enrich_timeout(),
        )?);

        tracing::info!(
            sqlite_path = %config.sqlite_path,
            enrich_url = %config.enrich_url,
            "Item store ready"
        );

        Ok(Self::build(sqlite_repo, source, config))
    }
}

// ============================================================================
// Test support - in-memory doubles for unit tests
// ============================================================================
