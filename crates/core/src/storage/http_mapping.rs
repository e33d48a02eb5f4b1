//! Pure functions for mapping repository errors to HTTP responses.
//!
//! This module provides HTTP status code and client-facing detail mappings for
//! [`RepositoryError`] variants, following the Functional Core pattern - pure
//! functions with no side effects.

use crate::item::ITEM_NOT_FOUND;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Validation` -> 422 (Unprocessable Entity)
/// - `InvalidData` -> 422 (Unprocessable Entity)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use items_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::item_not_found(999);
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::Validation(_) => 422,
        RepositoryError::InvalidData(_) => 422,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
    }
}

/// Maps a [`RepositoryError`] to the `detail` message shown to clients.
///
/// Store failures are reported generically; their cause is only logged.
pub fn error_detail(error: &RepositoryError) -> String {
    match error {
        RepositoryError::NotFound { entity_type, .. } if *entity_type == "Item" => {
            ITEM_NOT_FOUND.to_string()
        }
        RepositoryError::NotFound { entity_type, .. } => format!("{entity_type} not found"),
        RepositoryError::Validation(err) => err.to_string(),
        RepositoryError::InvalidData(msg) => msg.clone(),
        RepositoryError::ConnectionFailed(_) => "Storage unavailable".to_string(),
        RepositoryError::QueryFailed(_) => "Internal server error".to_string(),
    }
}
