//! Event ledger - append-only per-order history of producer events
//!
//! The ledger does not know which orders exist. Rejecting events for unknown
//! orders is the dispatcher's job.

use std::collections::HashMap;

use parking_lot::RwLock;
use shared::order::OrderEvent;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct EventLedger {
    events: RwLock<HashMap<Uuid, Vec<OrderEvent>>>,
}

impl EventLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, order_id: Uuid, event: OrderEvent) {
        self.events.write().entry(order_id).or_default().push(event);
    }

    /// Full history in arrival order; empty when nothing was recorded
    pub fn events_for(&self, order_id: &Uuid) -> Vec<OrderEvent> {
        self.events
            .read()
            .get(order_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of events across all orders
    pub fn total_events(&self) -> usize {
        self.events.read().values().map(Vec::len).sum()
    }
}
