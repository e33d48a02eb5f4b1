use serde_json::{Map, Value};

use crate::item::{EnrichedItem, Item};

use super::error::UpstreamUnavailable;
use super::operations::fallback_payload;

/// Open-ended enrichment data keyed by string.
pub type EnrichmentPayload = Map<String, Value>;

/// What an enrichment attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentOutcome {
    /// The source answered with this payload.
    Fetched(EnrichmentPayload),
    /// The source failed; the fallback payload stands in for it.
    Fallback(UpstreamUnavailable),
}

impl EnrichmentOutcome {
    /// Returns true if the fallback payload is being used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, EnrichmentOutcome::Fallback(_))
    }

    /// Short label for logs and the `x-enrichment-source` header.
    pub fn source_label(&self) -> &'static str {
        match self {
            EnrichmentOutcome::Fetched(_) => "upstream",
            EnrichmentOutcome::Fallback(_) => "fallback",
        }
    }

    /// The payload to hand to callers.
    pub fn into_payload(self) -> EnrichmentPayload {
        match self {
            EnrichmentOutcome::Fetched(payload) => payload,
            EnrichmentOutcome::Fallback(_) => fallback_payload(),
        }
    }
}

impl From<Result<EnrichmentPayload, UpstreamUnavailable>> for EnrichmentOutcome {
    fn from(result: Result<EnrichmentPayload, UpstreamUnavailable>) -> Self {
        match result {
            Ok(payload) => EnrichmentOutcome::Fetched(payload),
            Err(reason) => EnrichmentOutcome::Fallback(reason),
        }
    }
}

/// A stored item paired with the outcome of enriching it. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentResult {
    pub item: Item,
    pub outcome: EnrichmentOutcome,
}

impl EnrichmentResult {
    /// Converts into the response body, resolving the fallback payload.
    pub fn into_response(self) -> EnrichedItem {
        EnrichedItem {
            item: self.item,
            enriched: self.outcome.into_payload(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NewItem;
    use serde_json::json;

    fn payload(value: Value) -> EnrichmentPayload {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_fetched_outcome_keeps_payload() {
        let outcome = EnrichmentOutcome::Fetched(payload(json!({ "rating": 5 })));

        assert!(!outcome.is_fallback());
        assert_eq!(outcome.source_label(), "upstream");
        assert_eq!(outcome.into_payload(), payload(json!({ "rating": 5 })));
    }

    #[test]
    fn test_fallback_outcome_uses_default_payload() {
        let outcome = EnrichmentOutcome::Fallback(UpstreamUnavailable::Timeout);

        assert!(outcome.is_fallback());
        assert_eq!(outcome.source_label(), "fallback");
        assert_eq!(
            outcome.into_payload(),
            payload(json!({ "extra_info": "default" }))
        );
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: Result<EnrichmentPayload, UpstreamUnavailable> = Ok(EnrichmentPayload::new());
        assert_eq!(
            EnrichmentOutcome::from(ok),
            EnrichmentOutcome::Fetched(EnrichmentPayload::new())
        );

        let err: Result<EnrichmentPayload, UpstreamUnavailable> =
            Err(UpstreamUnavailable::Status(500));
        assert_eq!(
            EnrichmentOutcome::from(err),
            EnrichmentOutcome::Fallback(UpstreamUnavailable::Status(500))
        );
    }

    #[test]
    fn test_result_into_response() {
        let item = NewItem::new("Lamp").into_item(4);
        let result = EnrichmentResult {
            item: item.clone(),
            outcome: EnrichmentOutcome::Fallback(UpstreamUnavailable::Request(
                "connection refused".to_string(),
            )),
        };

        let body = serde_json::to_value(result.into_response()).unwrap();
        assert_eq!(
            body,
            json!({
                "item": { "id": 4, "name": "Lamp", "description": null, "price": null },
                "enriched": { "extra_info": "default" },
            })
        );
    }
}
