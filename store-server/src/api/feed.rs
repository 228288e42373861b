//! Dashboard WebSocket endpoint — 实时订单状态推送
//!
//! GET /ws?clientId=<token>
//!
//! 协议:
//! - Store → Dashboard: OrderUpdate JSON text frame
//! - Dashboard → Store: ignored (read only to detect disconnect)

use axum::extract::ws::{WebSocket, WebSocketUpgrade, rejection::WebSocketUpgradeRejection};
use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use axum::routing::get;
use futures::StreamExt;
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use tokio::sync::mpsc;

use crate::api::bad_query;
use crate::core::ServerState;
use crate::live::run_session;

pub fn router() -> Router<ServerState> {
    Router::new().route("/ws", get(handle_feed_ws))
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    #[serde(rename = "clientId")]
    client_id: Option<String>,
}

/// GET /ws?clientId=<token>
///
/// The token is checked before the upgrade, so a missing one is a plain 400.
pub async fn handle_feed_ws(
    State(state): State<ServerState>,
    query: Result<Query<FeedQuery>, QueryRejection>,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> AppResult<Response> {
    let Query(query) = query.map_err(bad_query)?;
    let client_id = query
        .client_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::new(ErrorCode::ClientTokenMissing))?;

    let ws = ws.map_err(|rejection| AppError::invalid_request(rejection.body_text()))?;

    Ok(ws
        .on_failed_upgrade({
            let client_id = client_id.clone();
            move |e| tracing::warn!(client_id = %client_id, error = %e, "Feed upgrade failed")
        })
        .on_upgrade(move |socket| feed_session(socket, state, client_id)))
}

async fn feed_session(socket: WebSocket, state: ServerState, client_id: String) {
    let (tx, rx) = mpsc::channel(state.config.feed_buffer);
    let guard = state.hub.register(client_id, tx);

    let (sink, stream) = socket.split();
    run_session(sink, stream, rx, guard, state.config.feed_ping_interval()).await;
}
