//! Liveness endpoint.
//!
//! `/health` answers without touching the store, so it reports that the
//! process is serving requests, not that SQLite is reachable.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// GET /health - Basic liveness probe.
#[axum::debug_handler]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
