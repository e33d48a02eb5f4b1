use thiserror::Error;

/// Reasons an enrichment source could not provide data.
///
/// These never reach API callers; the gateway converts them into the
/// fallback payload and keeps the reason in the outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamUnavailable {
    #[error("Enrichment request timed out")]
    Timeout,
    #[error("Enrichment request failed: {0}")]
    Request(String),
    #[error("Enrichment source returned status {0}")]
    Status(u16),
    #[error("Malformed enrichment response: {0}")]
    MalformedBody(String),
}
