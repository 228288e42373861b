//! `AppError` and the JSON envelope every store endpoint answers with

use std::collections::HashMap;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::category::ErrorCategory;
use super::codes::ErrorCode;

/// Request-scoped failure: a code, a message for humans and optional context
///
/// Handlers return `AppResult<T>`; axum turns the error into the matching
/// status and an [`ApiResponse`] body.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    /// Offending field, order id, item index...
    pub details: Option<HashMap<String, Value>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Error carrying the code's stock message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Unknown order; the id goes into `details.order_id`
    pub fn order_not_found(order_id: impl std::fmt::Display) -> Self {
        Self::new(ErrorCode::OrderNotFound).with_detail("order_id", order_id.to_string())
    }

    /// Missing or blank input field
    pub fn required(field: &str) -> Self {
        Self::with_message(ErrorCode::RequiredField, format!("{field} is required"))
            .with_detail("field", field)
    }

    /// Unparsable body or request
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, message)
    }

    /// Value present but in the wrong shape (e.g. not a UUID)
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, message)
    }
}

/// `{code, message, details?}`
///
/// `code` is 0 for an acknowledgement, the [`ErrorCode`] value otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    /// Plain acknowledgement
    pub fn ok() -> Self {
        Self {
            code: ErrorCode::Success.code(),
            message: "OK".into(),
            details: None,
        }
    }

    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

impl From<AppError> for ApiResponse {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message,
            details: err.details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        let category = self.code.category();
        if category == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "Request failed with system error");
        } else {
            tracing::debug!(
                code = %self.code,
                category = category.name(),
                message = %self.message,
                status = status.as_u16(),
                "Request rejected"
            );
        }

        (status, Json(ApiResponse::from(self))).into_response()
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = match ErrorCode::try_from(self.code) {
            Ok(code) => code.http_status(),
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}
