//! Orders: registry, event history and producer-event dispatch

mod dispatch;
mod ledger;
mod registry;

pub use dispatch::{KITCHEN_DONE, OrderDispatcher, STATUS_COOKED, normalize_status};
pub use ledger::EventLedger;
pub use registry::OrderRegistry;
