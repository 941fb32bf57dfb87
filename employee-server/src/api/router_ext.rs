//! Router extension for oneshot calls
//!
//! Lets a caller drive the Router directly without going through the
//! network stack.

use axum::Router;
use axum::body::Body;
use http::{Request, Response};
use tower::Service;

use crate::core::ServerState;

/// Result type for oneshot API calls
pub type OneshotResult = anyhow::Result<Response<Body>>;

/// Extension trait for Router to support oneshot calls
#[async_trait::async_trait]
pub trait OneshotRouter {
    /// Process a single request against `state`
    ///
    /// # Example
    ///
    /// ```ignore
    /// let state = ServerState::in_memory(Config::default()).await?;
    /// let request = Request::builder().uri("/employees").body(Body::empty())?;
    /// let response = build_app().oneshot(&state, request).await?;
    /// ```
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult;
}

#[async_trait::async_trait]
impl OneshotRouter for Router<ServerState> {
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult {
        let mut svc = self.clone().with_state(state.clone());
        let response = svc.call(request).await?;
        Ok(response)
    }
}
