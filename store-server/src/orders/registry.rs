//! Order registry - canonical in-memory state of every order
//!
//! Orders live for the lifetime of the process. All access goes through a
//! single `RwLock`: lookups and listings share the read side, creation and
//! status updates take the write side. Every value handed out is a clone, so
//! callers never observe a half-written order.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use parking_lot::RwLock;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::order::{Order, OrderItem};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct OrderRegistry {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a new pending order
    ///
    /// Fails without touching the map when `items` is empty or any line is
    /// invalid.
    pub fn create_order(&self, items: Vec<OrderItem>, note: impl Into<String>) -> AppResult<Order> {
        validate_items(&items)?;
        let note = note.into();

        let mut orders = self.orders.write();
        loop {
            let order_id = Uuid::new_v4();
            if let Entry::Vacant(slot) = orders.entry(order_id) {
                let order = Order::new(order_id, items, note);
                slot.insert(order.clone());
                return Ok(order);
            }
        }
    }

    pub fn get_order(&self, order_id: &Uuid) -> Option<Order> {
        self.orders.read().get(order_id).cloned()
    }

    /// Snapshot of all orders, in no particular order
    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.read().values().cloned().collect()
    }

    /// Replace the status of an existing order
    ///
    /// Returns `false` if the order is unknown.
    pub fn update_status(&self, order_id: &Uuid, status: &str) -> bool {
        match self.orders.write().get_mut(order_id) {
            Some(order) => {
                order.order_status = status.to_string();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}

fn validate_items(items: &[OrderItem]) -> AppResult<()> {
    if items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }
    for (index, item) in items.iter().enumerate() {
        if item.pizza_type.trim().is_empty() {
            return Err(AppError::new(ErrorCode::OrderItemMissingName).with_detail("index", index));
        }
        if item.quantity == 0 {
            return Err(AppError::new(ErrorCode::OrderItemInvalidQuantity)
                .with_detail("index", index)
                .with_detail("pizza_type", item.pizza_type.clone()));
        }
    }
    Ok(())
}
