//! Live order feed for dashboards

mod hub;
mod session;

pub use hub::{BroadcastReport, ClientGuard, ConnectionHub, FeedSender};
pub use session::run_session;
