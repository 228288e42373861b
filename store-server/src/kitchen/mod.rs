//! Kitchen collaborator
//!
//! The store only ever *starts* cooking: it posts the order to the kitchen and
//! forgets about it. Progress comes back later through `POST /events`.
//!
//! ```text
//! submit_order ──spawn──▶ KitchenNotifier::start_cooking ──HTTP──▶ kitchen /cook
//!                                                                     │
//! POST /events ◀──────────────── kitchen reports status ◀─────────────┘
//! ```

mod client;

pub use client::HttpKitchen;

use async_trait::async_trait;
use shared::order::CookRequest;
use thiserror::Error;

/// Failure to hand an order to the kitchen
///
/// Never reaches a handler: the dispatcher logs it and the order stays
/// `pending`.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("kitchen request timed out")]
    Timeout,

    #[error("kitchen unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("kitchen rejected cook request with status {status}")]
    Rejected { status: u16 },

    #[error("failed to build kitchen client: {0}")]
    Client(#[source] reqwest::Error),
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NotifyError::Timeout
        } else {
            NotifyError::Unreachable(err)
        }
    }
}

/// Starts cooking for a freshly created order
#[async_trait]
pub trait KitchenNotifier: Send + Sync + 'static {
    async fn start_cooking(&self, request: &CookRequest) -> Result<(), NotifyError>;
}
