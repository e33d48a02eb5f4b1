//! items_core - domain types and pure logic for the items service.
//!
//! Everything here is free of I/O: validation, request/response bodies shared
//! by the server and client, repository and enrichment-source traits, and the
//! mapping from errors to HTTP responses.

pub mod enrichment;
pub mod item;
pub mod storage;
