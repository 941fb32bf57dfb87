//! Employee API Module
//!
//! | Path | Method | Success |
//! |------|--------|---------|
//! | /employees | POST | 201 + created record |
//! | /employees | GET | 200 + all records |
//! | /employees/{id} | PUT | 200 + updated record |
//! | /employees/{id} | DELETE | 204 |

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employees", get(handler::list).post(handler::create))
        .route("/employees/{id}", put(handler::update).delete(handler::delete))
}
