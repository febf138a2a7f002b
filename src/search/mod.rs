//! Search request validation and result ranking
//!
//! The /search pipeline: validated query parameters in, filtered and
//! value-ranked listings out.

pub mod query;
pub mod ranking;

pub use query::{RawSearchParams, SearchQuery};
pub use ranking::{rank_listings, RankedListing};
