//! Order API Module
//!
//! Order submission plus read-only access to the registry.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/order", post(handler::create))
        .route("/orders", get(handler::list))
        .route("/orders/{order_id}", get(handler::get_by_id))
}
