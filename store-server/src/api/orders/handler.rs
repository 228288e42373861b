//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::error::{AppError, AppResult};
use shared::order::{CreateOrderRequest, Order};

use crate::api::{bad_body, parse_order_id};
use crate::core::ServerState;

/// Submit a new order; the kitchen is notified in the background
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let Json(payload) = payload.map_err(bad_body)?;
    let order = state
        .dispatcher
        .submit_order(payload.order_items, payload.order_data)?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// List all orders
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Order>> {
    Json(state.registry.list_orders())
}

/// Get order by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Order>> {
    let order_id = parse_order_id(&order_id)?;
    let order = state
        .registry
        .get_order(&order_id)
        .ok_or_else(|| AppError::order_not_found(order_id))?;
    Ok(Json(order))
}
