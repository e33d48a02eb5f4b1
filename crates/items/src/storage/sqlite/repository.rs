//! SQLite repository implementation.
//!
//! Implements the repository traits from `items_core::storage` using SQLite.
//!
//! Each operation runs as one closure on the `tokio_rusqlite` connection
//! thread. Statements are finalized when the closure returns, on every path,
//! and the async caller never blocks a runtime worker while SQLite runs.

use async_trait::async_trait;
use rusqlite::params;
use tokio_rusqlite::Connection;

use items_core::item::{normalize_search, validate_new_item, Item, ItemId, NewItem};
use items_core::storage::{ItemRepository, RepositoryError, Result};

use super::conversions::row_to_item;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to the `items` table.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite item store");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn list_items(&self, search: Option<&str>) -> Result<Vec<Item>> {
        let search = normalize_search(search).map(str::to_owned);

        self.conn
            .call(move |conn| {
                let items = match search {
                    Some(term) => {
                        let mut stmt = conn
                            .prepare(schema::SELECT_ITEMS_BY_NAME)
                            .map_err(wrap_err)?;
                        let rows = stmt
                            .query_map(params![term], row_to_item)
                            .map_err(wrap_err)?;
                        rows.collect::<rusqlite::Result<Vec<_>>>()
                    }
                    None => {
                        let mut stmt = conn.prepare(schema::SELECT_ALL_ITEMS).map_err(wrap_err)?;
                        let rows = stmt.query_map([], row_to_item).map_err(wrap_err)?;
                        rows.collect::<rusqlite::Result<Vec<_>>>()
                    }
                };
                items.map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item"))
    }

    async fn create_item(&self, item: &NewItem) -> Result<ItemId> {
        validate_new_item(item)?;

        let NewItem {
            name,
            description,
            price,
        } = item.clone();

        self.conn
            .call(move |conn| {
                // The ID comes back from the INSERT itself, so no other
                // statement can observe or reuse it in between.
                conn.query_row(
                    schema::INSERT_ITEM,
                    params![name, description, price],
                    |row| row.get::<_, ItemId>(0),
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item"))
    }

    async fn get_item(&self, id: ItemId) -> Result<Option<Item>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                match stmt.query_row(params![id], row_to_item) {
                    Ok(item) => Ok(Some(item)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item"))
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        let deleted = self
            .conn
            .call(move |conn| {
                conn.execute(schema::DELETE_ITEM, params![id])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item"))?;

        if deleted == 0 {
            return Err(RepositoryError::item_not_found(id));
        }

        Ok(())
    }
}
