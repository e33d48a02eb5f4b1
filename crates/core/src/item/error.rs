use thiserror::Error;

/// Errors that can occur when validating an item before it is stored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item name cannot be empty")]
    EmptyName,
    #[error("Item name too long (max 255 characters)")]
    NameTooLong,
    #[error("Item description too long (max 1000 characters)")]
    DescriptionTooLong,
    #[error("Item price cannot be negative")]
    NegativePrice,
    #[error("Item price must be a finite number")]
    NonFinitePrice,
}
