//! Liveness probe

use axum::{routing::get, Router};

/// GET /health - never touches storage
async fn health() -> &'static str {
    "OK"
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
