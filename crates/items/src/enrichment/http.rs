//! Enrichment source backed by an external HTTP API.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;

use items_core::enrichment::{
    parse_enrichment_body, EnrichmentPayload, EnrichmentSource, UpstreamUnavailable,
};

/// Calls `GET <endpoint>?name=<item name>` and expects a JSON object back.
#[derive(Debug, Clone)]
pub struct HttpEnrichmentSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpEnrichmentSource {
    /// Creates a source for `endpoint`. `timeout` bounds the whole request,
    /// from connect to the last byte of the body.
    pub fn new(endpoint: &str, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid enrichment endpoint: {endpoint}"))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build enrichment HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// Builds the request URL. The name is form-encoded, never spliced in raw.
    fn url_for(&self, name: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("name", name);
        url
    }
}

fn classify(err: reqwest::Error) -> UpstreamUnavailable {
    if err.is_timeout() {
        UpstreamUnavailable::Timeout
    } else {
        UpstreamUnavailable::Request(err.to_string())
    }
}

#[async_trait]
impl EnrichmentSource for HttpEnrichmentSource {
    async fn fetch(&self, name: &str) -> Result<EnrichmentPayload, UpstreamUnavailable> {
        let response = self
            .client
            .get(self.url_for(name))
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamUnavailable::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(classify)?;
        parse_enrichment_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::net::SocketAddr;

    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    /// Serves `router` on an ephemeral local port.
    async fn serve(router: Router) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn source(addr: SocketAddr, timeout: Duration) -> HttpEnrichmentSource {
        HttpEnrichmentSource::new(&format!("http://{addr}/enrich"), timeout).unwrap()
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let result = HttpEnrichmentSource::new("not a url", Duration::from_secs(5));
        assert!(result.is_err());
    }

    #[test]
    fn test_url_encodes_name() {
        let source =
            HttpEnrichmentSource::new("https://api.example.com/enrich", Duration::from_secs(5))
                .unwrap();

        let url = source.url_for("Salt & Pepper #1");

        assert_eq!(
            url.as_str(),
            "https://api.example.com/enrich?name=Salt+%26+Pepper+%231"
        );
    }

    #[tokio::test]
    async fn test_fetch_returns_object_payload() {
        let router = Router::new().route(
            "/enrich",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({ "seen_name": params.get("name"), "rating": 4 }))
            }),
        );
        let addr = serve(router).await;

        let payload = source(addr, Duration::from_secs(5))
            .fetch("Salt & Pepper")
            .await
            .unwrap();

        assert_eq!(payload["seen_name"], "Salt & Pepper");
        assert_eq!(payload["rating"], 4);
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let router = Router::new().route(
            "/enrich",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Json(json!({ "late": true }))
            }),
        );
        let addr = serve(router).await;

        let result = source(addr, Duration::from_millis(100)).fetch("Slow").await;

        assert_eq!(result, Err(UpstreamUnavailable::Timeout));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = source(addr, Duration::from_secs(5)).fetch("Nobody home").await;

        assert!(matches!(result, Err(UpstreamUnavailable::Request(_))));
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let router = Router::new().route(
            "/enrich",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "error": "down" }))) }),
        );
        let addr = serve(router).await;

        let result = source(addr, Duration::from_secs(5)).fetch("Item").await;

        assert_eq!(result, Err(UpstreamUnavailable::Status(503)));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let router = Router::new().route("/enrich", get(|| async { "definitely not json" }));
        let addr = serve(router).await;

        let result = source(addr, Duration::from_secs(5)).fetch("Item").await;

        assert!(matches!(result, Err(UpstreamUnavailable::MalformedBody(_))));
    }
}
