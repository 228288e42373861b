//! Producer event API
//!
//! Kitchen and delivery report status changes here; the history is readable
//! per order.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/events", post(handler::report).get(handler::list_for_order))
}
