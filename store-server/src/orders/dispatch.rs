//! Ingestion & dispatch
//!
//! Producer events flow through here: normalize, update the registry, record
//! the raw event, broadcast the effective status.
//!
//! ```text
//! POST /events ─▶ handle_event
//!                   ├─ normalize_status (kitchen DONE → COOKED)
//!                   ├─ OrderRegistry::update_status ── unknown → OrderNotFound
//!                   ├─ EventLedger::append (raw status)
//!                   └─ ConnectionHub::broadcast (effective status)
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use shared::error::{AppError, AppResult};
use shared::live::OrderUpdate;
use shared::order::{CookRequest, Order, OrderEvent, OrderItem, SOURCE_KITCHEN};
use uuid::Uuid;

use super::{EventLedger, OrderRegistry};
use crate::kitchen::KitchenNotifier;
use crate::live::ConnectionHub;

/// Kitchen's internal completion status
pub const KITCHEN_DONE: &str = "DONE";
/// Externally visible completion status
pub const STATUS_COOKED: &str = "COOKED";

/// Map a producer status onto the store's status vocabulary
pub fn normalize_status<'a>(source: &str, raw_status: &'a str) -> &'a str {
    if source == SOURCE_KITCHEN && raw_status == KITCHEN_DONE {
        STATUS_COOKED
    } else {
        raw_status
    }
}

pub struct OrderDispatcher {
    registry: Arc<OrderRegistry>,
    ledger: Arc<EventLedger>,
    hub: ConnectionHub,
    kitchen: Arc<dyn KitchenNotifier>,
    /// Serializes update → append → broadcast so that per-order status,
    /// history and feed order agree. Held only over in-memory work.
    sequencer: Mutex<()>,
}

impl std::fmt::Debug for OrderDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderDispatcher")
            .field("orders", &self.registry.len())
            .field("events", &self.ledger.total_events())
            .field("hub", &self.hub)
            .finish_non_exhaustive()
    }
}

impl OrderDispatcher {
    pub fn new(
        registry: Arc<OrderRegistry>,
        ledger: Arc<EventLedger>,
        hub: ConnectionHub,
        kitchen: Arc<dyn KitchenNotifier>,
    ) -> Self {
        Self {
            registry,
            ledger,
            hub,
            kitchen,
            sequencer: Mutex::new(()),
        }
    }

    /// Apply one producer event
    ///
    /// Unknown orders fail with `OrderNotFound` and leave the ledger and the
    /// feed untouched. On success returns the update that was broadcast.
    pub fn handle_event(
        &self,
        order_id: Uuid,
        raw_status: &str,
        source: &str,
    ) -> AppResult<OrderUpdate> {
        let effective = normalize_status(source, raw_status);

        let _seq = self.sequencer.lock();

        if !self.registry.update_status(&order_id, effective) {
            tracing::debug!(order_id = %order_id, source, status = raw_status, "Event for unknown order rejected");
            return Err(AppError::order_not_found(order_id));
        }

        self.ledger
            .append(order_id, OrderEvent::new(order_id, raw_status, source));

        let update = OrderUpdate::now(order_id, effective, source);
        let report = self.hub.broadcast(&update);

        tracing::info!(
            order_id = %order_id,
            source,
            raw_status,
            status = effective,
            delivered = report.delivered,
            dropped = report.dropped,
            "Order status updated"
        );

        Ok(update)
    }

    /// Create an order and ask the kitchen to start cooking it
    ///
    /// The kitchen call runs detached: its outcome is only logged and never
    /// affects the returned order, which stays `pending` if the call fails.
    /// Must be called from within a tokio runtime.
    pub fn submit_order(&self, items: Vec<OrderItem>, note: impl Into<String>) -> AppResult<Order> {
        let order = self.registry.create_order(items, note)?;

        tracing::info!(
            order_id = %order.order_id,
            items = order.order_items.len(),
            pizzas = order.pizza_count(),
            "Order created"
        );

        let kitchen = Arc::clone(&self.kitchen);
        let request = CookRequest::from(&order);
        tokio::spawn(async move {
            match kitchen.start_cooking(&request).await {
                Ok(()) => {
                    tracing::info!(order_id = %request.order_id, "Kitchen notified");
                }
                Err(e) => {
                    tracing::warn!(order_id = %request.order_id, error = %e, "Failed to notify kitchen");
                }
            }
        });

        Ok(order)
    }

    pub fn registry(&self) -> &OrderRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &EventLedger {
        &self.ledger
    }

    pub fn hub(&self) -> &ConnectionHub {
        &self.hub
    }
}
