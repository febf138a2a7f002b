//! HTTP surface: routing, shared state and request handlers
//!
//! Four operations: the static documentation page, the platform
//! connectivity acknowledgment, the fixed validation payload, and the
//! shopping search pipeline.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::search::{rank_listings, RankedListing, RawSearchParams, SearchQuery};
use crate::serpapi::SerpClient;

/// Shared per-process state handed to every handler.
///
/// Nothing in here is mutable; no state outlives a single request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub serp: SerpClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            serp: SerpClient::new(),
        }
    }

    /// State with a custom provider client (used by tests)
    pub fn with_client(config: Config, serp: SerpClient) -> Self {
        Self { config, serp }
    }
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home).post(connectivity_ack))
        .route("/validate", get(validate))
        .route("/search", get(search))
        .with_state(state)
}

/// GET / - static documentation page
async fn home() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

/// POST / - connectivity check acknowledgment for the hosting platform
async fn connectivity_ack() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "POST request successful" }))
}

/// GET /validate - fixed identity payload
async fn validate(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "number": state.config.validate_number }))
}

/// GET /search - proxy the shopping search and rank results by value
async fn search(
    State(state): State<AppState>,
    Query(params): Query<RawSearchParams>,
) -> Result<Json<Vec<RankedListing>>, AppError> {
    let Some(api_key) = state
        .config
        .serpapi_key
        .as_deref()
        .filter(|key| !key.is_empty())
    else {
        return Err(AppError::missing_params());
    };

    let query = SearchQuery::from_params(&params)?;

    info!(keyword = %query.keyword, "shopping search");
    let response = state
        .serp
        .shopping_search(api_key, &query.keyword)
        .await
        .map_err(|e| {
            warn!("provider call failed: {}", e);
            e
        })?;

    Ok(Json(rank_listings(response.shopping_results, &query)))
}

const DOCS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Deal Finder</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body class="bg-light">
    <div class="container my-5">
        <div class="p-5 mb-4 bg-white rounded-3 shadow-sm">
            <h1 class="display-5 fw-bold">Deal Finder</h1>
            <p class="col-md-8 fs-4">Finds and ranks Google Shopping deals in India by value for money.</p>
        </div>
        <h2>Endpoints</h2>
        <div class="row">
            <div class="col-lg-8 mb-4">
                <div class="card h-100">
                    <div class="card-body">
                        <h5 class="card-title"><code>/search</code> <span class="badge bg-primary">GET</span></h5>
                        <p class="card-text">Searches products and ranks them by rating per rupee.</p>
                        <h6>Parameters:</h6>
                        <ul class="list-group list-group-flush">
                            <li class="list-group-item"><code>keyword</code> <span class="badge rounded-pill bg-danger">required</span></li>
                            <li class="list-group-item"><code>max_price</code> <span class="badge rounded-pill bg-danger">required</span></li>
                            <li class="list-group-item"><code>min_price</code> <span class="badge rounded-pill bg-secondary">optional</span></li>
                            <li class="list-group-item"><code>min_rating</code> <span class="badge rounded-pill bg-secondary">optional</span></li>
                        </ul>
                    </div>
                </div>
            </div>
            <div class="col-lg-4 mb-4">
                <div class="card h-100">
                    <div class="card-body">
                        <h5 class="card-title"><code>/validate</code> <span class="badge bg-primary">GET</span></h5>
                        <p class="card-text">Returns the identity payload used for platform validation.</p>
                    </div>
                </div>
            </div>
        </div>
    </div>
</body>
</html>
"#;
