//! Unified error system for the pizza store services
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0-999: General errors
//! - 4xxx: Order errors
//! - 5xxx: Live feed errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderItemInvalidQuantity).with_detail("index", 0);
//! assert_eq!(err.http_status().as_u16(), 400);
//!
//! let body = ApiResponse::error(&err);
//! assert_eq!(body.code, 4003);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
