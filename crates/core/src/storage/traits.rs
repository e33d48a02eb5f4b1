use async_trait::async_trait;

use crate::item::{Item, ItemId, NewItem};

use super::Result;

/// Repository for item operations.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Lists items in ascending ID order, optionally keeping only those whose
    /// name contains `search` (case-sensitive). An empty term means no filter.
    async fn list_items(&self, search: Option<&str>) -> Result<Vec<Item>>;

    /// Validates and stores a new item, returning its assigned ID.
    async fn create_item(&self, item: &NewItem) -> Result<ItemId>;

    /// Gets an item by its ID.
    async fn get_item(&self, id: ItemId) -> Result<Option<Item>>;

    /// Deletes an item by its ID. Fails with `NotFound` if it does not exist.
    async fn delete_item(&self, id: ItemId) -> Result<()>;
}
