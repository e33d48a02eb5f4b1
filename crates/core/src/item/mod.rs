mod error;
mod operations;
mod requests;
mod responses;
mod types;

pub use error::ItemError;
pub use operations::{
    matches_search, normalize_search, validate_new_item, MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS,
};
pub use requests::{CreateItemRequest, ListItemsQuery};
pub use responses::{
    CreatedItem, EnrichedItem, ErrorResponse, ItemList, MessageResponse, ITEM_CREATED,
    ITEM_DELETED, ITEM_NOT_FOUND,
};
pub use types::{Item, ItemId, NewItem};
