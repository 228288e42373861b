mod common;

use std::time::Duration;

use common::{app, call, create_order, report, test_state};
use http::StatusCode;
use serde_json::json;
use shared::ErrorCode;
use shared::live::OrderUpdate;
use tokio::sync::mpsc;

async fn next_update(rx: &mut mpsc::Receiver<axum::extract::ws::Utf8Bytes>) -> OrderUpdate {
    let frame = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no update within 2s")
        .expect("feed queue closed");
    serde_json::from_str(frame.as_str()).unwrap()
}

#[tokio::test]
async fn feed_requires_client_id() {
    let (state, _kitchen) = test_state();
    let app = app(&state);

    for uri in ["/ws", "/ws?clientId=", "/ws?clientId=%20%20"] {
        let (status, body) = call(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(body["code"], ErrorCode::ClientTokenMissing.code());
    }
    assert_eq!(state.hub.client_count(), 0);
}

#[tokio::test]
async fn feed_without_upgrade_headers_registers_nothing() {
    let (state, _kitchen) = test_state();
    let app = app(&state);

    let (status, _) = call(&app, "GET", "/ws?clientId=dash-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!state.hub.is_registered("dash-1"));
}

#[tokio::test]
async fn undecodable_feed_query_uses_error_envelope() {
    let (state, _kitchen) = test_state();
    let app = app(&state);

    let (status, body) = call(&app, "GET", "/ws?clientId=a&clientId=b", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::InvalidRequest.code());
    assert_eq!(state.hub.client_count(), 0);
}

#[tokio::test]
async fn registered_client_receives_effective_status() {
    let (state, _kitchen) = test_state();
    let app = app(&state);
    let (tx, mut rx) = mpsc::channel(8);
    let guard = state.hub.register("dash-1", tx);

    let order = create_order(&app, json!([{ "pizzaType": "Margherita", "quantity": 1 }])).await;
    let id = order["orderId"].as_str().unwrap();

    assert_eq!(report(&app, id, "DONE", "kitchen").await, StatusCode::OK);

    let update = next_update(&mut rx).await;
    assert_eq!(update.order_id.to_string(), id);
    assert_eq!(update.status, "COOKED");
    assert_eq!(update.source, "kitchen");
    assert!(chrono::DateTime::parse_from_rfc3339(&update.timestamp).is_ok());

    drop(guard);
    assert!(!state.hub.is_registered("dash-1"));

    let (_, health) = call(&app, "GET", "/health", None).await;
    assert_eq!(health["connectedClients"], 0);
}

#[tokio::test]
async fn two_clients_get_identical_payloads() {
    let (state, _kitchen) = test_state();
    let app = app(&state);
    let (tx1, mut rx1) = mpsc::channel(8);
    let (tx2, mut rx2) = mpsc::channel(8);
    let _g1 = state.hub.register("dash-1", tx1);
    let _g2 = state.hub.register("dash-2", tx2);

    let order = create_order(&app, json!([{ "pizzaType": "Pepperoni", "quantity": 2 }])).await;
    let id = order["orderId"].as_str().unwrap();
    report(&app, id, "cooking", "kitchen").await;

    assert_eq!(next_update(&mut rx1).await, next_update(&mut rx2).await);
}

#[tokio::test]
async fn gone_client_never_fails_the_producer() {
    let (state, _kitchen) = test_state();
    let app = app(&state);
    let (dead_tx, dead_rx) = mpsc::channel(1);
    let (live_tx, mut live_rx) = mpsc::channel(8);
    let _dead = state.hub.register("dead", dead_tx);
    let _live = state.hub.register("live", live_tx);
    drop(dead_rx);

    let order = create_order(&app, json!([{ "pizzaType": "Veggie", "quantity": 1 }])).await;
    let id = order["orderId"].as_str().unwrap();

    assert_eq!(report(&app, id, "cooking", "kitchen").await, StatusCode::OK);
    assert_eq!(next_update(&mut live_rx).await.status, "cooking");
    assert!(!state.hub.is_registered("dead"));
}

#[tokio::test]
async fn rejected_event_is_not_broadcast() {
    let (state, _kitchen) = test_state();
    let app = app(&state);
    let (tx, mut rx) = mpsc::channel(8);
    let _guard = state.hub.register("dash-1", tx);

    let ghost = uuid::Uuid::new_v4().to_string();
    assert_eq!(report(&app, &ghost, "cooking", "kitchen").await, StatusCode::NOT_FOUND);

    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn updates_arrive_in_event_order() {
    let (state, _kitchen) = test_state();
    let app = app(&state);
    let (tx, mut rx) = mpsc::channel(32);
    let _guard = state.hub.register("dash-1", tx);

    let order = create_order(&app, json!([{ "pizzaType": "Margherita", "quantity": 1 }])).await;
    let id = order["orderId"].as_str().unwrap();

    let steps = ["cooking", "preparing pizza", "in oven", "DONE"];
    for step in steps {
        report(&app, id, step, "kitchen").await;
    }

    let mut seen = Vec::new();
    for _ in steps {
        seen.push(next_update(&mut rx).await.status);
    }
    assert_eq!(seen, ["cooking", "preparing pizza", "in oven", "COOKED"]);
}
