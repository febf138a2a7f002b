//! Listing filtering & value ranking
//!
//! The per-listing pipeline: coerce price and rating to numbers, apply the
//! price/rating exclusion rules, score survivors by rating/price and sort
//! best-value-first.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

use super::query::SearchQuery;
use crate::serpapi::RawListing;

/// A filtered, scored listing as returned to the client.
///
/// String fields mirror the provider and serialize as null when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedListing {
    pub name: Option<String>,
    pub source: Option<String>,
    pub price: f64,
    pub rating: f64,
    pub link: Option<String>,
    pub thumbnail: Option<String>,
    pub value_score: f64,
}

/// Filter and rank raw provider listings for `query`.
///
/// Listings whose price or rating cannot be coerced to a number are dropped
/// silently; a bad listing never fails the request. Output is sorted by
/// value score descending. The sort is stable, so equal scores keep
/// provider order.
pub fn rank_listings(listings: Vec<RawListing>, query: &SearchQuery) -> Vec<RankedListing> {
    let mut ranked: Vec<RankedListing> = listings
        .into_iter()
        .filter_map(|item| score_listing(item, query))
        .collect();

    ranked.sort_by(|a, b| {
        b.value_score
            .partial_cmp(&a.value_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// Score a single listing, or drop it.
///
/// Returns None both for coercion failures and for listings excluded by the
/// price/rating rules. Price bounds are inclusive; the chained comparison
/// form also rejects NaN prices.
fn score_listing(item: RawListing, query: &SearchQuery) -> Option<RankedListing> {
    let price = coerce_number(item.extracted_price.as_ref())?;
    let rating = coerce_number(item.rating.as_ref())?;

    if price == 0.0
        || !(query.min_price <= price && price <= query.max_price)
        || rating < query.min_rating
    {
        return None;
    }

    // price == 0 is excluded above
    let value_score = if price != 0.0 { rating / price } else { 0.0 };

    Some(RankedListing {
        name: item.title,
        source: item.source,
        price,
        rating,
        link: item.product_link,
        thumbnail: item.thumbnail,
        value_score,
    })
}

/// Coerce a raw provider value to f64.
///
/// Absent values default to 0. Numbers pass through, numeric strings are
/// parsed, anything else is a coercion failure.
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value {
        None => Some(0.0),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(title: &str, price: Value, rating: Value) -> RawListing {
        RawListing {
            title: Some(title.to_string()),
            source: Some("Example Store".to_string()),
            extracted_price: Some(price),
            rating: Some(rating),
            product_link: Some(format!("https://example.com/{}", title)),
            thumbnail: None,
        }
    }

    fn query(max_price: f64, min_price: f64, min_rating: f64) -> SearchQuery {
        SearchQuery {
            keyword: "laptop".to_string(),
            max_price,
            min_price,
            min_rating,
        }
    }

    #[test]
    fn test_price_and_rating_bounds() {
        let listings = vec![
            listing("free", json!(0), json!(4.5)),
            listing("in-range", json!(45000), json!(4.5)),
            listing("too-expensive", json!(60000), json!(4.0)),
            listing("low-rated", json!(25000), json!(3.9)),
        ];

        let results = rank_listings(listings, &query(50000.0, 20000.0, 4.0));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name.as_deref(), Some("in-range"));
        assert_eq!(results[0].price, 45000.0);
        assert_eq!(results[0].rating, 4.5);
        assert_eq!(results[0].value_score, 4.5 / 45000.0);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let listings = vec![
            listing("at-min", json!(100), json!(4.0)),
            listing("at-max", json!(500), json!(4.0)),
            listing("at-min-rating", json!(200), json!(3.0)),
        ];

        let results = rank_listings(listings, &query(500.0, 100.0, 3.0));
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_sorted_by_value_score_descending() {
        let listings = vec![
            listing("a", json!(1000), json!(4.0)),
            listing("b", json!(500), json!(4.0)),
            listing("c", json!(2000), json!(5.0)),
        ];

        let results = rank_listings(listings, &query(10000.0, 0.0, 0.0));

        assert_eq!(results.len(), 3);
        for pair in results.windows(2) {
            assert!(pair[0].value_score >= pair[1].value_score);
        }
        assert_eq!(results[0].name.as_deref(), Some("b"));
        assert_eq!(results[2].name.as_deref(), Some("c"));
    }

    #[test]
    fn test_ties_keep_provider_order() {
        let listings = vec![
            listing("first", json!(1000), json!(4.0)),
            listing("second", json!(1000), json!(4.0)),
            listing("third", json!(1000), json!(4.0)),
        ];

        let results = rank_listings(listings, &query(10000.0, 0.0, 0.0));

        let names: Vec<_> = results.iter().map(|r| r.name.as_deref().unwrap()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_string_prices_are_coerced() {
        let listings = vec![listing("stringy", json!("450.5"), json!("4.5"))];

        let results = rank_listings(listings, &query(1000.0, 0.0, 0.0));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].price, 450.5);
        assert_eq!(results[0].rating, 4.5);
    }

    #[test]
    fn test_unparseable_values_drop_the_listing() {
        let listings = vec![
            listing("bad-price", json!("N/A"), json!(4.5)),
            listing("bad-rating", json!(300), json!([4.5])),
            listing("bool-price", json!(true), json!(4.5)),
            listing("good", json!(300), json!(4.5)),
        ];

        let results = rank_listings(listings, &query(1000.0, 0.0, 0.0));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name.as_deref(), Some("good"));
    }

    #[test]
    fn test_missing_price_defaults_to_zero_and_is_excluded() {
        let listings = vec![RawListing {
            title: Some("no-price".to_string()),
            ..RawListing::default()
        }];

        let results = rank_listings(listings, &query(1000.0, 0.0, 0.0));
        assert!(results.is_empty());
    }

    #[test]
    fn test_missing_rating_defaults_to_zero() {
        let listings = vec![RawListing {
            title: Some("unrated".to_string()),
            extracted_price: Some(json!(300)),
            ..RawListing::default()
        }];

        // Kept when no rating floor is set, with a zero score
        let results = rank_listings(listings.clone(), &query(1000.0, 0.0, 0.0));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].rating, 0.0);
        assert_eq!(results[0].value_score, 0.0);

        // Dropped once a floor applies
        let results = rank_listings(listings, &query(1000.0, 0.0, 1.0));
        assert!(results.is_empty());
    }

    #[test]
    fn test_nan_price_is_excluded() {
        let listings = vec![listing("nan", json!("NaN"), json!(4.5))];
        let results = rank_listings(listings, &query(1000.0, 0.0, 0.0));
        assert!(results.is_empty());
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let listings = vec![
            listing("a", json!(1000), json!(4.0)),
            listing("b", json!("N/A"), json!(4.0)),
            listing("c", json!(500), json!(3.5)),
        ];

        let q = query(10000.0, 0.0, 0.0);
        let first = rank_listings(listings.clone(), &q);
        let second = rank_listings(listings, &q);
        assert_eq!(first, second);
    }
}
