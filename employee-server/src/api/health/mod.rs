//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | liveness check |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0" }
//! ```

use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// ok | error
    pub status: String,
    pub version: String,
}

/// Liveness check, does not touch the store
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
