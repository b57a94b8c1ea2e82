// web_app/api/client.rs - HTTP client for the recommendation endpoint
//
// One GET, no query, no body, no auth. The response must be a JSON array of
// product records. Every failure mode collapses into the same user-facing
// message; the detailed error is only for logs.

use std::time::Duration;

use thiserror::Error;

use crate::web_app::config::{parse_endpoint, ConfigError, WidgetConfig};
use crate::web_app::enrichment::MockEnrichment;
use crate::web_app::model::{Product, ProductRecord};

/// The only error text a widget ever shows
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("recommendation endpoint returned HTTP {0}")]
    Status(u16),

    #[error("request to recommendation endpoint failed: {0}")]
    Transport(String),

    #[error("could not decode recommendations: {0}")]
    Parse(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FetchError {
    /// Text shown inline in place of the widget
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Parse(e.to_string())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        // The browser's fetch has no per-client timeout
        fn build_http(_timeout: Duration) -> reqwest::Client {
            reqwest::Client::new()
        }
    } else {
        fn build_http(timeout: Duration) -> reqwest::Client {
            reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, ?timeout, "HTTP client build failed, falling back to no timeout");
                    reqwest::Client::new()
                })
        }
    }
}

/// Fetches the recommendation list from a configured endpoint
#[derive(Clone, Debug)]
pub struct RecommendationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RecommendationClient {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            http: build_http(Duration::from_secs(config.timeout_secs)),
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the endpoint and decode the raw records
    pub async fn fetch_records(&self) -> Result<Vec<ProductRecord>, FetchError> {
        let url = parse_endpoint(&self.endpoint)?;

        tracing::debug!(endpoint = %url, "Fetching product recommendations");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str::<Vec<ProductRecord>>(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Fetch and run the records through mock enrichment
    pub async fn fetch_products(
        &self,
        enrichment: &mut MockEnrichment,
    ) -> Result<Vec<Product>, FetchError> {
        let records = self.fetch_records().await?;
        tracing::info!(count = records.len(), "Fetched product recommendations");
        Ok(enrichment.enrich(records))
    }
}
