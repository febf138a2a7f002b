//! SerpApi client for Google Shopping searches
//!
//! Issues one outbound request per search and deserializes the
//! `shopping_results` array. Anything that goes wrong on the wire becomes
//! an upstream error; listing-level data quality is the ranking pipeline's
//! concern.

use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

/// Engine identifier sent to SerpApi
const ENGINE: &str = "google_shopping";

/// SerpApi client
#[derive(Debug, Clone)]
pub struct SerpClient {
    client: reqwest::Client,
    base_url: String,
}

impl SerpClient {
    /// Create a client against the production SerpApi endpoint
    pub fn new() -> Self {
        Self::with_base_url("https://serpapi.com")
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: crate::http::client(),
            base_url: base_url.into(),
        }
    }

    /// Run a Google Shopping search for `keyword`.
    ///
    /// Results are localized to English / India. No retry and no timeout;
    /// the single attempt either yields a decoded response or an upstream
    /// error carrying the cause.
    pub async fn shopping_search(
        &self,
        api_key: &str,
        keyword: &str,
    ) -> Result<ShoppingResponse, AppError> {
        let url = format!("{}/search.json", self.base_url);
        let params = [
            ("api_key", api_key),
            ("engine", ENGINE),
            ("q", keyword),
            ("hl", "en"),
            ("gl", "in"),
        ];

        let response = self.client.get(&url).query(&params).send().await?;
        let response = response.error_for_status()?;
        let body: ShoppingResponse = response.json().await?;
        Ok(body)
    }
}

impl Default for SerpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level SerpApi response; only the shopping results are consumed
#[derive(Debug, Default, Deserialize)]
pub struct ShoppingResponse {
    #[serde(default)]
    pub shopping_results: Vec<RawListing>,
}

/// One provider-supplied listing.
///
/// Every field may be absent. `extracted_price` and `rating` stay raw JSON
/// values; the provider emits numbers or strings depending on the listing,
/// and coercion happens in the ranking pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListing {
    pub title: Option<String>,
    pub source: Option<String>,
    pub extracted_price: Option<Value>,
    pub rating: Option<Value>,
    pub product_link: Option<String>,
    pub thumbnail: Option<String>,
}
