//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without the async repository.

use items_core::item::Item;
use rusqlite::Row;

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, name, description, price
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
    })
}
