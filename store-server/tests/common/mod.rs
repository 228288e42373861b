#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use shared::order::CookRequest;
use store_server::{Config, KitchenNotifier, NotifyError, ServerState};
use tokio::sync::mpsc;
use tower::ServiceExt;

/// Kitchen stand-in that records every cook request
pub struct RecordingKitchen {
    tx: mpsc::UnboundedSender<CookRequest>,
}

#[async_trait]
impl KitchenNotifier for RecordingKitchen {
    async fn start_cooking(&self, request: &CookRequest) -> Result<(), NotifyError> {
        let _ = self.tx.send(request.clone());
        Ok(())
    }
}

pub fn test_state() -> (ServerState, mpsc::UnboundedReceiver<CookRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let state = ServerState::with_kitchen(Config::default(), Arc::new(RecordingKitchen { tx }));
    (state, rx)
}

pub fn app(state: &ServerState) -> Router {
    store_server::api::build_app(state.clone())
}

/// One request through the router; the body is decoded as JSON when present
pub async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send(app, request).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn create_order(app: &Router, items: Value) -> Value {
    let (status, order) = call(
        app,
        "POST",
        "/order",
        Some(serde_json::json!({ "orderItems": items, "orderData": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    order
}

pub async fn report(app: &Router, order_id: &str, status: &str, source: &str) -> StatusCode {
    call(
        app,
        "POST",
        "/events",
        Some(serde_json::json!({ "orderId": order_id, "status": status, "source": source })),
    )
    .await
    .0
}
