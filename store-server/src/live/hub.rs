//! ConnectionHub — dashboard 实时推送
//!
//! 管理所有在线 dashboard 连接，按 clientId 索引。
//!
//! ```text
//! OrderDispatcher
//!       │ OrderUpdate
//!       ▼
//! ConnectionHub::broadcast ── JSON 编码一次
//!   └── clients: clientId → (conn_id, mpsc::Sender<Utf8Bytes>)
//!             │ try_send (不阻塞，不持锁写 socket)
//!             ▼
//!       feed session task ──▶ WebSocket
//! ```
//!
//! A reconnect under the same `clientId` replaces the previous entry. Each
//! registration carries a connection id so that the old session's cleanup
//! cannot evict its replacement.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::ws::Utf8Bytes;
use parking_lot::RwLock;
use shared::live::OrderUpdate;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Outbound half handed to the hub for one connection
pub type FeedSender = mpsc::Sender<Utf8Bytes>;

/// Outcome of one broadcast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub dropped: usize,
}

struct ClientSlot {
    conn_id: u64,
    tx: FeedSender,
}

#[derive(Default)]
struct HubInner {
    clients: RwLock<HashMap<String, ClientSlot>>,
    next_conn_id: AtomicU64,
}

#[derive(Clone, Default)]
pub struct ConnectionHub {
    inner: Arc<HubInner>,
}

impl std::fmt::Debug for ConnectionHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionHub")
            .field("clients", &self.client_count())
            .finish()
    }
}

impl ConnectionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册连接（覆盖同 clientId 的旧连接）
    ///
    /// The returned guard unregisters this connection when dropped. Dropping
    /// the replaced sender closes the old session's queue, which ends it.
    #[must_use = "dropping the guard unregisters the client immediately"]
    pub fn register(&self, client_id: impl Into<String>, tx: FeedSender) -> ClientGuard {
        let client_id = client_id.into();
        let conn_id = self.inner.next_conn_id.fetch_add(1, Ordering::Relaxed);

        let replaced = self
            .inner
            .clients
            .write()
            .insert(client_id.clone(), ClientSlot { conn_id, tx });

        if replaced.is_some() {
            tracing::info!(client_id = %client_id, conn_id, "Feed client re-registered, replacing previous connection");
        } else {
            tracing::debug!(client_id = %client_id, conn_id, "Feed client registered");
        }

        ClientGuard {
            hub: self.clone(),
            client_id,
            conn_id,
        }
    }

    /// Remove whatever connection is registered under `client_id`
    pub fn unregister(&self, client_id: &str) -> bool {
        self.inner.clients.write().remove(client_id).is_some()
    }

    /// Remove `client_id` only if it still belongs to `conn_id`
    fn release(&self, client_id: &str, conn_id: u64) -> bool {
        let mut clients = self.inner.clients.write();
        match clients.get(client_id) {
            Some(slot) if slot.conn_id == conn_id => {
                clients.remove(client_id);
                true
            }
            _ => false,
        }
    }

    /// 广播订单更新
    ///
    /// Encodes once and enqueues to every client. A full or closed queue is
    /// logged and skipped; the caller never sees a per-client failure.
    pub fn broadcast(&self, update: &OrderUpdate) -> BroadcastReport {
        let json = match serde_json::to_string(update) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(order_id = %update.order_id, error = %e, "Failed to encode order update");
                return BroadcastReport::default();
            }
        };
        self.broadcast_text(Utf8Bytes::from(json))
    }

    /// Enqueue an already-encoded frame to every client
    pub fn broadcast_text(&self, text: Utf8Bytes) -> BroadcastReport {
        // Snapshot the senders so the lock is released before any send.
        let targets: Vec<(String, u64, FeedSender)> = self
            .inner
            .clients
            .read()
            .iter()
            .map(|(id, slot)| (id.clone(), slot.conn_id, slot.tx.clone()))
            .collect();

        let mut report = BroadcastReport::default();
        let mut closed = Vec::new();

        for (client_id, conn_id, tx) in targets {
            match tx.try_send(text.clone()) {
                Ok(()) => report.delivered += 1,
                Err(TrySendError::Full(_)) => {
                    report.dropped += 1;
                    tracing::warn!(client_id = %client_id, "Feed client lagging, update dropped");
                }
                Err(TrySendError::Closed(_)) => {
                    report.dropped += 1;
                    tracing::warn!(client_id = %client_id, "Feed client gone, update dropped");
                    closed.push((client_id, conn_id));
                }
            }
        }

        for (client_id, conn_id) in closed {
            self.release(&client_id, conn_id);
        }

        report
    }

    /// Drop every registration, ending all feed sessions
    ///
    /// Used on shutdown so open sockets do not hold the graceful drain open.
    pub fn disconnect_all(&self) -> usize {
        let drained: Vec<_> = self.inner.clients.write().drain().collect();
        drained.len()
    }

    pub fn is_registered(&self, client_id: &str) -> bool {
        self.inner.clients.read().contains_key(client_id)
    }

    pub fn client_count(&self) -> usize {
        self.inner.clients.read().len()
    }
}

/// Scoped registration: unregisters its own connection on drop
///
/// Runs on every exit path of the owning session, including panics.
pub struct ClientGuard {
    hub: ConnectionHub,
    client_id: String,
    conn_id: u64,
}

impl ClientGuard {
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl Drop for ClientGuard {
    fn drop(&mut self) {
        if self.hub.release(&self.client_id, self.conn_id) {
            tracing::debug!(client_id = %self.client_id, conn_id = self.conn_id, "Feed client unregistered");
        }
    }
}
