use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::Deserialize;
use shared::error::{ApiResponse, AppError, AppResult};
use shared::order::OrderEvent;

use crate::api::{bad_body, bad_query, parse_order_id};
use crate::core::ServerState;

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
}

/// Apply a producer event
pub async fn report(
    State(state): State<ServerState>,
    payload: Result<Json<OrderEvent>, JsonRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Json(event) = payload.map_err(bad_body)?;

    if event.status.trim().is_empty() {
        return Err(AppError::required("status"));
    }
    if event.source.trim().is_empty() {
        return Err(AppError::required("source"));
    }

    state
        .dispatcher
        .handle_event(event.order_id, &event.status, &event.source)?;

    Ok(Json(ApiResponse::ok()))
}

/// Event history of one order, oldest first
pub async fn list_for_order(
    State(state): State<ServerState>,
    query: Result<Query<EventsQuery>, QueryRejection>,
) -> AppResult<Json<Vec<OrderEvent>>> {
    let Query(query) = query.map_err(bad_query)?;
    let raw = query
        .order_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::required("orderId"))?;
    let order_id = parse_order_id(&raw)?;

    Ok(Json(state.ledger.events_for(&order_id)))
}
