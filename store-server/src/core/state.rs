//! 服务器状态
//!
//! 所有 handler 共享的状态，`Clone` 只复制 `Arc`。

use std::sync::Arc;

use crate::core::{Config, Result};
use crate::kitchen::{HttpKitchen, KitchenNotifier};
use crate::live::ConnectionHub;
use crate::orders::{EventLedger, OrderDispatcher, OrderRegistry};

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub registry: Arc<OrderRegistry>,
    pub ledger: Arc<EventLedger>,
    pub hub: ConnectionHub,
    pub dispatcher: Arc<OrderDispatcher>,
}

impl ServerState {
    /// Build state with the HTTP kitchen client from `config`
    pub fn initialize(config: &Config) -> Result<Self> {
        let kitchen = HttpKitchen::new(&config.kitchen_url, config.kitchen_timeout())?;
        tracing::info!(cook_url = kitchen.cook_url(), "Kitchen client ready");
        Ok(Self::with_kitchen(config.clone(), Arc::new(kitchen)))
    }

    /// Build state around any kitchen implementation
    pub fn with_kitchen(config: Config, kitchen: Arc<dyn KitchenNotifier>) -> Self {
        let registry = Arc::new(OrderRegistry::new());
        let ledger = Arc::new(EventLedger::new());
        let hub = ConnectionHub::new();
        let dispatcher = Arc::new(OrderDispatcher::new(
            Arc::clone(&registry),
            Arc::clone(&ledger),
            hub.clone(),
            kitchen,
        ));

        Self {
            config,
            registry,
            ledger,
            hub,
            dispatcher,
        }
    }
}
