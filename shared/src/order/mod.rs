//! Order Module
//!
//! Wire types shared by the store, its producers and its dashboards:
//! - Orders: the record the store owns
//! - Events: raw status reports from the kitchen and delivery services
//! - Requests: order submission and the kitchen cook call

pub mod event;
pub mod snapshot;
pub mod types;

// Re-exports
pub use event::{OrderEvent, SOURCE_DELIVERY, SOURCE_KITCHEN};
pub use snapshot::{Order, OrderItem, STATUS_PENDING};
pub use types::{CookRequest, CreateOrderRequest};
