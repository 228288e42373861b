//! Health check endpoint

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health_check))
}

pub async fn health_check(State(state): State<ServerState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "store-server",
        "version": env!("CARGO_PKG_VERSION"),
        "connectedClients": state.hub.client_count(),
        "orders": state.registry.len(),
    }))
}
