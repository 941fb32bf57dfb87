//! API routes
//!
//! - [`health`] - liveness check
//! - [`employees`] - employee CRUD

pub mod employees;
pub mod health;
pub mod router_ext;

pub use router_ext::{OneshotResult, OneshotRouter};

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request id generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(employees::router())
        .merge(health::router())
}

/// Build the fully layered application
///
/// Used by both the HTTP server and oneshot calls. State is applied by the
/// caller.
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - any origin
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - request spans
        .layer(TraceLayer::new_for_http())
        // Copy the request ID onto the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so every inner layer sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
