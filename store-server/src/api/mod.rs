//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`orders`] - 下单与订单查询
//! - [`events`] - 生产者事件上报与事件历史
//! - [`feed`] - dashboard WebSocket 实时推送

pub mod events;
pub mod feed;
pub mod health;
pub mod orders;

use std::any::Any;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware};
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(events::router())
        .merge(feed::router())
}

/// Router bound to `state` with panic recovery, CORS and access logging
pub fn build_app(state: ServerState) -> Router {
    with_layers(build_router().with_state(state))
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}

/// 处理器 panic → 500 + InternalError
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "Request handler panicked");

    ApiResponse::from(AppError::new(ErrorCode::InternalError)).into_response()
}

/// Body extraction failures become a 400 in the shared error envelope
pub(crate) fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::invalid_request(rejection.body_text())
}

/// Same for query strings that do not deserialize
pub(crate) fn bad_query(rejection: QueryRejection) -> AppError {
    AppError::invalid_request(rejection.body_text())
}

/// Order ids arrive as path segments or query values
pub(crate) fn parse_order_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        AppError::invalid_format(format!("Invalid order ID: {raw}")).with_detail("orderId", raw)
    })
}
