use std::{env, time::Duration};

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-field lines (default).
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "items.db")
    pub sqlite_path: String,
    /// Enrichment endpoint (default: "https://api.example.com/enrich")
    pub enrich_url: String,
    /// Delay before each outbound enrichment call in milliseconds (default: 2000)
    pub enrich_delay_ms: u64,
    /// Bound on a single outbound enrichment call in milliseconds (default: 5000)
    pub enrich_timeout_ms: u64,
    /// Whole-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Origins allowed by CORS (default: localhost:3000 and 127.0.0.1:3000)
    pub cors_allowed_origins: Vec<String>,
    /// Log output format (default: pretty)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "items.db")
    /// - `ENRICH_URL` - Enrichment endpoint (default: "https://api.example.com/enrich")
    /// - `ENRICH_DELAY_MS` - Delay before each enrichment call (default: 2000)
    /// - `ENRICH_TIMEOUT_MS` - Enrichment call timeout (default: 5000)
    /// - `REQUEST_TIMEOUT_SECONDS` - Whole-request timeout (default: 10)
    /// - `CORS_ALLOWED_ORIGINS` - Comma-separated origin list
    /// - `LOG_FORMAT` - `pretty` or `json` (default: pretty)
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "items.db".to_string()),
            enrich_url: lookup("ENRICH_URL")
                .unwrap_or_else(|| "https://api.example.com/enrich".to_string()),
            enrich_delay_ms: parsed("ENRICH_DELAY_MS", 2_000),
            enrich_timeout_ms: parsed("ENRICH_TIMEOUT_MS", 5_000),
            request_timeout_seconds: parsed("REQUEST_TIMEOUT_SECONDS", 10),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_else(|| {
                    vec![
                        "http://localhost:3000".to_string(),
                        "http://127.0.0.1:3000".to_string(),
                    ]
                }),
            log_format: lookup("LOG_FORMAT")
                .and_then(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Get the pre-call enrichment delay as a Duration.
    pub fn enrich_delay(&self) -> Duration {
        Duration::from_millis(self.enrich_delay_ms)
    }

    /// Get the enrichment call timeout as a Duration.
    pub fn enrich_timeout(&self) -> Duration {
        Duration::from_millis(self.enrich_timeout_ms)
    }

    /// Get the whole-request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Worst-case time an enrich request spends outside the store.
    pub fn enrichment_budget(&self) -> Duration {
        self.enrich_delay() + self.enrich_timeout()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
