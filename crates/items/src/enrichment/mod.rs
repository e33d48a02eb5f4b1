//! Enrichment gateway and its HTTP source.

mod gateway;
mod http;

pub use gateway::EnrichmentGateway;
pub use http::HttpEnrichmentSource;
