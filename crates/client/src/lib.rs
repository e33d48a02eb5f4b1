//! items_client - CLI client for the items API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::ItemsClient;
pub use error::{ClientError, Result};
