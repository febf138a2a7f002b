//! HTTP client utilities
//!
//! Provides the shared reqwest::Client used for outbound provider calls.

use reqwest::Client;

/// Build the outbound HTTP client.
///
/// No request timeout is set; provider calls run with reqwest's defaults
/// until completion or failure.
pub fn client() -> Client {
    Client::builder()
        .user_agent(concat!("dealfinder/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}
