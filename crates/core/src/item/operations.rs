use super::error::ItemError;
use super::types::{Item, NewItem};

/// Maximum item name length, in characters.
pub const MAX_NAME_CHARS: usize = 255;

/// Maximum item description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Validates an item before it is persisted.
///
/// Lengths are counted in Unicode scalar values, not bytes.
pub fn validate_new_item(item: &NewItem) -> Result<(), ItemError> {
    if item.name.trim().is_empty() {
        return Err(ItemError::EmptyName);
    }
    if item.name.chars().count() > MAX_NAME_CHARS {
        return Err(ItemError::NameTooLong);
    }
    if let Some(description) = &item.description {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(ItemError::DescriptionTooLong);
        }
    }
    if let Some(price) = item.price {
        if !price.is_finite() {
            return Err(ItemError::NonFinitePrice);
        }
        if price < 0.0 {
            return Err(ItemError::NegativePrice);
        }
    }
    Ok(())
}

/// Normalizes a search term: a missing or empty term means "no filter".
pub fn normalize_search(search: Option<&str>) -> Option<&str> {
    search.filter(|term| !term.is_empty())
}

/// Returns true if the item matches the search term.
///
/// Matching is a case-sensitive, literal substring test on the name. The SQL
/// store implements the same rule with `instr`.
pub fn matches_search(item: &Item, search: Option<&str>) -> bool {
    normalize_search(search).is_none_or(|term| item.name.contains(term))
}
