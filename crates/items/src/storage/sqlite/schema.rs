//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O. Every value is
//! passed as a bound parameter; nothing is spliced into the SQL text.

/// SQL statement to create the items table.
///
/// The CHECK constraints mirror the validation in `items_core` so that rows
/// written by other tools still respect the item invariants.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 255),
    description TEXT CHECK (description IS NULL OR length(description) <= 1000),
    price REAL CHECK (price IS NULL OR price >= 0)
);
"#;

/// Inserts an item and returns its assigned ID in the same statement.
pub const INSERT_ITEM: &str = r#"
INSERT INTO items (name, description, price)
VALUES (?1, ?2, ?3)
RETURNING id
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name, description, price
FROM items
WHERE id = ?1
"#;

pub const SELECT_ALL_ITEMS: &str = r#"
SELECT id, name, description, price
FROM items
ORDER BY id ASC
"#;

/// Case-sensitive literal substring match. `instr` has no wildcard characters,
/// so `%` and `_` in the search term match themselves.
pub const SELECT_ITEMS_BY_NAME: &str = r#"
SELECT id, name, description, price
FROM items
WHERE instr(name, ?1) > 0
ORDER BY id ASC
"#;

/// Deletes an item; the affected-row count tells whether it existed.
pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;
