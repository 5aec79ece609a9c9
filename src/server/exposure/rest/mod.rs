//! REST exposure: health checks only
//!
//! Everything else is served over GraphQL.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    pub fn build_router() -> Router {
        Self::health_routes()
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "cinegraph"
        }))
    }
}
