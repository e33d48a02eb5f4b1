//! API response bodies shared between the server and client.

use serde::{Deserialize, Serialize};

use crate::enrichment::EnrichmentPayload;

use super::types::{Item, ItemId};

/// Message returned after a successful create.
pub const ITEM_CREATED: &str = "Item created";

/// Message returned after a successful delete.
pub const ITEM_DELETED: &str = "Item deleted";

/// Detail returned when an item does not exist.
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Body of `GET /items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

/// Body of `POST /items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedItem {
    pub id: ItemId,
    pub message: String,
}

impl CreatedItem {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            message: ITEM_CREATED.to_string(),
        }
    }
}

/// Body of responses that only carry a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Body of `POST /items/{id}/enrich`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedItem {
    pub item: Item,
    pub enriched: EnrichmentPayload,
}
