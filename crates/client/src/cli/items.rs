//! Item CLI commands.

use clap::{Parser, Subcommand};
use items_core::item::ItemId;

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List items.
    List {
        /// Only items whose name contains this text (case-sensitive).
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a new item.
    Create {
        /// Item name.
        #[arg(long)]
        name: String,
        /// Item description.
        #[arg(long)]
        description: Option<String>,
        /// Item price.
        #[arg(long)]
        price: Option<f64>,
    },
    /// Get item by ID.
    Get {
        /// Item ID.
        id: ItemId,
    },
    /// Delete item by ID.
    Delete {
        /// Item ID.
        id: ItemId,
    },
    /// Fetch external data for an item.
    Enrich {
        /// Item ID.
        id: ItemId,
    },
}
