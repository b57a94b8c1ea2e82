// web_app/config.rs - Widget configuration
//
// The endpoint URL and enrichment mode are fixed at build time through
// environment variables read with option_env!:
// - RECOMMENDATIONS_URL: full URL of the recommendation endpoint
// - RECOMMENDATIONS_SEED: u64 seed for reproducible placeholder prices/ratings
// - RECOMMENDATIONS_MOCK_ENRICHMENT: "off" disables placeholder randomness
//
// The App provides the config through Leptos context; tests and host pages can
// provide their own before mounting the widgets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::web_app::enrichment::EnrichmentMode;

/// Endpoint used when nothing is configured at build time
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/getProductRecommendations";

/// Request timeout used when nothing is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid recommendation endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

/// Configuration shared by every widget on the page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub enrichment: EnrichmentMode,
    pub timeout_secs: u64,
}

impl WidgetConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            enrichment: EnrichmentMode::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Build from the variables captured at compile time
    pub fn from_build_env() -> Self {
        let endpoint = option_env!("RECOMMENDATIONS_URL").unwrap_or(DEFAULT_ENDPOINT);
        let enrichment = parse_enrichment(
            option_env!("RECOMMENDATIONS_MOCK_ENRICHMENT"),
            option_env!("RECOMMENDATIONS_SEED"),
        );
        Self::new(endpoint).with_enrichment(enrichment)
    }

    pub fn with_enrichment(mut self, enrichment: EnrichmentMode) -> Self {
        self.enrichment = enrichment;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Check that the endpoint is an absolute http(s) URL
    pub fn endpoint_url(&self) -> Result<reqwest::Url, ConfigError> {
        parse_endpoint(&self.endpoint)
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Parse an endpoint, accepting only absolute http(s) URLs
pub fn parse_endpoint(endpoint: &str) -> Result<reqwest::Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        url: endpoint.to_string(),
        reason,
    };
    let url = reqwest::Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

fn parse_enrichment(switch: Option<&str>, seed: Option<&str>) -> EnrichmentMode {
    if matches!(switch.map(str::trim), Some("off") | Some("false") | Some("0")) {
        return EnrichmentMode::Disabled;
    }
    match seed.and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(seed) => EnrichmentMode::Seeded(seed),
        None => EnrichmentMode::Random,
    }
}
