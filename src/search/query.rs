//! Query parameter parsing & validation
//!
//! Turns the raw /search query string into a validated `SearchQuery`.
//! All failures here are client errors; nothing in this module touches the
//! network.

use serde::Deserialize;

use crate::error::AppError;

/// Raw /search query parameters, exactly as they arrive on the URL
#[derive(Debug, Default, Deserialize)]
pub struct RawSearchParams {
    pub keyword: Option<String>,
    pub max_price: Option<String>,
    pub min_price: Option<String>,
    pub min_rating: Option<String>,
}

/// Validated search query with numeric bounds.
///
/// min_price <= max_price is deliberately not enforced; an inverted range
/// simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub keyword: String,
    pub max_price: f64,
    pub min_price: f64,
    pub min_rating: f64,
}

impl SearchQuery {
    /// Validate raw parameters into a query.
    ///
    /// keyword and max_price are required; an empty value counts as absent.
    /// min_price and min_rating default to 0.
    pub fn from_params(params: &RawSearchParams) -> Result<Self, AppError> {
        let keyword = params.keyword.as_deref().filter(|s| !s.is_empty());
        let max_price = params.max_price.as_deref().filter(|s| !s.is_empty());

        let (keyword, max_price) = match (keyword, max_price) {
            (Some(k), Some(m)) => (k, m),
            _ => return Err(AppError::missing_params()),
        };

        Ok(SearchQuery {
            keyword: keyword.to_string(),
            max_price: parse_number(max_price)?,
            min_price: parse_number(params.min_price.as_deref().unwrap_or("0"))?,
            min_rating: parse_number(params.min_rating.as_deref().unwrap_or("0"))?,
        })
    }
}

/// Parse a price/rating parameter, tolerating surrounding whitespace
fn parse_number(raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::not_numeric())
}
