//! Shared types for the pizza store services
//!
//! Wire models for orders and producer events, the live feed protocol, and
//! the unified error system used by every HTTP handler.

pub mod error;
pub mod live;
pub mod order;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use live::OrderUpdate;
pub use order::{Order, OrderEvent, OrderItem};
