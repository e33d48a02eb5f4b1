mod error;
mod operations;
mod traits;
mod types;

pub use error::UpstreamUnavailable;
pub use operations::{fallback_payload, parse_enrichment_body};
pub use traits::EnrichmentSource;
pub use types::{EnrichmentOutcome, EnrichmentPayload, EnrichmentResult};
