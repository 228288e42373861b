//! Per-connection feed session
//!
//! 一个 dashboard 连接一个 task：
//! - hub 队列 → WebSocket text frame
//! - 定时 Ping 保活
//! - 客户端发来的消息一律忽略，Close / 错误 / EOF 结束会话

use std::fmt::Display;
use std::time::Duration;

use axum::extract::ws::{Message, Utf8Bytes};
use futures::{Sink, SinkExt, Stream, StreamExt};
use tokio::sync::mpsc;

use super::hub::ClientGuard;

/// Pump queued updates to one client until either side goes away
///
/// The guard is released on return, so the client is unregistered no matter
/// which side ended the session.
pub async fn run_session<S, R, E>(
    mut sink: S,
    mut stream: R,
    mut rx: mpsc::Receiver<Utf8Bytes>,
    guard: ClientGuard,
    ping_every: Duration,
) where
    S: Sink<Message> + Unpin,
    S::Error: Display,
    R: Stream<Item = Result<Message, E>> + Unpin,
    E: Display,
{
    let client_id = guard.client_id().to_string();
    tracing::info!(client_id = %client_id, "Feed client connected");

    let mut ping_interval = tokio::time::interval(ping_every);
    ping_interval.tick().await; // skip immediate

    let reason = loop {
        tokio::select! {
            _ = ping_interval.tick() => {
                if let Err(e) = sink.send(Message::Ping(Default::default())).await {
                    tracing::debug!(client_id = %client_id, error = %e, "Feed ping failed");
                    break "send failed";
                }
            }

            frame = rx.recv() => {
                let Some(text) = frame else {
                    break "replaced";
                };
                if let Err(e) = sink.send(Message::Text(text)).await {
                    tracing::debug!(client_id = %client_id, error = %e, "Feed write failed");
                    break "send failed";
                }
            }

            inbound = stream.next() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | None => break "closed by client",
                    Some(Err(e)) => {
                        tracing::debug!(client_id = %client_id, error = %e, "Feed read failed");
                        break "read failed";
                    }
                    Some(Ok(_)) => {}
                }
            }
        }
    };

    drop(guard);
    let _ = sink.close().await;

    tracing::info!(client_id = %client_id, reason, "Feed client disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live::ConnectionHub;
    use futures::channel::mpsc as fmpsc;
    use shared::live::OrderUpdate;
    use uuid::Uuid;

    type Inbound = Result<Message, std::convert::Infallible>;

    struct Harness {
        hub: ConnectionHub,
        outbound: fmpsc::UnboundedReceiver<Message>,
        inbound: fmpsc::UnboundedSender<Inbound>,
        task: tokio::task::JoinHandle<()>,
    }

    fn start(client_id: &str, ping_every: Duration) -> Harness {
        let hub = ConnectionHub::new();
        let (out_tx, out_rx) = fmpsc::unbounded::<Message>();
        let (in_tx, in_rx) = fmpsc::unbounded::<Inbound>();
        let (tx, rx) = mpsc::channel(8);
        let guard = hub.register(client_id, tx);

        let task = tokio::spawn(run_session(out_tx, in_rx, rx, guard, ping_every));
        Harness {
            hub,
            outbound: out_rx,
            inbound: in_tx,
            task,
        }
    }

    #[tokio::test]
    async fn forwards_updates_as_text_frames() {
        let mut h = start("dash", Duration::from_secs(3600));
        let update = OrderUpdate::now(Uuid::new_v4(), "COOKED", "kitchen");

        assert_eq!(h.hub.broadcast(&update).delivered, 1);

        match h.outbound.next().await {
            Some(Message::Text(text)) => {
                let got: OrderUpdate = serde_json::from_str(text.as_str()).unwrap();
                assert_eq!(got, update);
            }
            other => panic!("expected text frame, got {other:?}"),
        }

        drop(h.inbound);
        h.task.await.unwrap();
    }

    #[tokio::test]
    async fn client_close_unregisters() {
        let h = start("dash", Duration::from_secs(3600));
        assert!(h.hub.is_registered("dash"));

        h.inbound.unbounded_send(Ok(Message::Close(None))).unwrap();
        h.task.await.unwrap();

        assert!(!h.hub.is_registered("dash"));
    }

    #[tokio::test]
    async fn inbound_text_is_ignored() {
        let mut h = start("dash", Duration::from_secs(3600));

        h.inbound
            .unbounded_send(Ok(Message::Text("hello".into())))
            .unwrap();
        let update = OrderUpdate::now(Uuid::new_v4(), "cooking", "kitchen");
        h.hub.broadcast(&update);

        assert!(matches!(h.outbound.next().await, Some(Message::Text(_))));
        assert!(h.hub.is_registered("dash"));

        drop(h.inbound);
        h.task.await.unwrap();
    }

    #[tokio::test]
    async fn replacement_ends_old_session() {
        let h = start("dash", Duration::from_secs(3600));

        let (tx, _rx) = mpsc::channel(8);
        let _new_guard = h.hub.register("dash", tx);

        h.task.await.unwrap();
        assert!(h.hub.is_registered("dash"));
    }

    #[tokio::test]
    async fn sends_keepalive_pings() {
        let mut h = start("dash", Duration::from_millis(20));

        let frame = tokio::time::timeout(Duration::from_secs(2), h.outbound.next())
            .await
            .unwrap();
        assert!(matches!(frame, Some(Message::Ping(_))));

        drop(h.inbound);
        h.task.await.unwrap();
    }
}
