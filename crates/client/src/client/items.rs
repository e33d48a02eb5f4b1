//! Item API operations.

use super::ItemsClient;
use crate::error::Result;
use items_core::item::{
    CreateItemRequest, CreatedItem, EnrichedItem, Item, ItemId, ItemList, ListItemsQuery,
    MessageResponse,
};

impl ItemsClient {
    /// List items, optionally filtered by a name substring.
    pub async fn list_items(&self, query: ListItemsQuery) -> Result<Vec<Item>> {
        let response = self
            .client
            .get(self.url("/items"))
            .query(&query)
            .send()
            .await?;
        let list: ItemList = self.handle_response(response).await?;
        Ok(list.items)
    }

    /// Create a new item.
    pub async fn create_item(&self, req: &CreateItemRequest) -> Result<CreatedItem> {
        let response = self
            .client
            .post(self.url("/items"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get item by ID.
    pub async fn get_item(&self, id: ItemId) -> Result<Item> {
        let response = self
            .client
            .get(self.url(&format!("/items/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete item by ID.
    pub async fn delete_item(&self, id: ItemId) -> Result<MessageResponse> {
        let response = self
            .client
            .delete(self.url(&format!("/items/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Enrich item by ID.
    pub async fn enrich_item(&self, id: ItemId) -> Result<EnrichedItem> {
        let response = self
            .client
            .post(self.url(&format!("/items/{}/enrich", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
