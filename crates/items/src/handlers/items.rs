use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::{HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};

use items_core::item::{
    CreateItemRequest, CreatedItem, Item, ItemId, ItemList, ListItemsQuery, MessageResponse,
    ITEM_DELETED,
};
use items_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Response header naming where the `enriched` payload came from.
pub const ENRICHMENT_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-enrichment-source");

/// List items, optionally filtered by name (GET /items?search=).
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<ItemList>, AppError> {
    let items = state.item_repo.list_items(query.search.as_deref()).await?;

    tracing::debug!(count = items.len(), search = ?query.search, "Listed items");

    Ok(Json(ItemList { items }))
}

/// Create a new item (POST /items).
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let new_item = request.into_new_item();

    let id = state.item_repo.create_item(&new_item).await?;

    tracing::info!(item_id = id, name = %new_item.name, "Created new item");

    Ok((StatusCode::CREATED, Json(CreatedItem::new(id))))
}

/// Get a single item by ID (GET /items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<ItemId>, PathRejection>,
) -> Result<Json<Item>, AppError> {
    let Path(id) = id?;
    let item = state
        .item_repo
        .get_item(id)
        .await?
        .ok_or_else(|| RepositoryError::item_not_found(id))?;

    Ok(Json(item))
}

/// Delete an item by ID (DELETE /items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<ItemId>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = id?;
    state.item_repo.delete_item(id).await?;

    tracing::info!(item_id = id, "Deleted item");

    Ok(Json(MessageResponse::new(ITEM_DELETED)))
}

/// Enrich an item with data from the external source (POST /items/{id}/enrich).
///
/// Answers 200 with the fallback payload when the source is unavailable.
pub async fn enrich_item(
    State(state): State<AppState>,
    id: Result<Path<ItemId>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let result = state.enrichment.enrich(id).await?;
    let source = HeaderValue::from_static(result.outcome.source_label());

    Ok(([(ENRICHMENT_SOURCE_HEADER, source)], Json(result.into_response())))
}
