use serde_json::Value;

use super::error::UpstreamUnavailable;
use super::types::EnrichmentPayload;

/// Payload substituted when the enrichment source is unavailable.
pub fn fallback_payload() -> EnrichmentPayload {
    let mut payload = EnrichmentPayload::new();
    payload.insert(
        "extra_info".to_string(),
        Value::String("default".to_string()),
    );
    payload
}

/// Parses an enrichment response body. Only a JSON object is accepted.
pub fn parse_enrichment_body(body: &[u8]) -> Result<EnrichmentPayload, UpstreamUnavailable> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(payload)) => Ok(payload),
        Ok(other) => Err(UpstreamUnavailable::MalformedBody(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(err) => Err(UpstreamUnavailable::MalformedBody(err.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_payload() {
        assert_eq!(
            Value::Object(fallback_payload()),
            json!({ "extra_info": "default" })
        );
    }

    #[test]
    fn test_parse_object_body() {
        let payload = parse_enrichment_body(br#"{"category": "tools", "score": 0.8}"#).unwrap();
        assert_eq!(payload["category"], "tools");
        assert_eq!(payload["score"], 0.8);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = parse_enrichment_body(b"[1, 2, 3]").unwrap_err();
        assert_eq!(
            err,
            UpstreamUnavailable::MalformedBody("expected a JSON object, got an array".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_enrichment_body(b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, UpstreamUnavailable::MalformedBody(_)));
    }

    #[test]
    fn test_parse_rejects_empty_body() {
        assert!(parse_enrichment_body(b"").is_err());
    }
}
