//! Numeric error codes
//!
//! Ranges: 0-999 general request problems, 4xxx orders, 5xxx live feed,
//! 9xxx server-side failures. Codes travel as plain numbers in JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    Success = 0,

    // general
    InvalidRequest = 5,
    InvalidFormat = 6,
    RequiredField = 7,

    // orders
    OrderNotFound = 4001,
    OrderEmpty = 4002,
    OrderItemInvalidQuantity = 4003,
    OrderItemMissingName = 4004,

    // live feed
    ClientTokenMissing = 5001,

    // server
    InternalError = 9001,
}

impl ErrorCode {
    /// Every defined code, in numeric order
    pub const ALL: [ErrorCode; 10] = [
        ErrorCode::Success,
        ErrorCode::InvalidRequest,
        ErrorCode::InvalidFormat,
        ErrorCode::RequiredField,
        ErrorCode::OrderNotFound,
        ErrorCode::OrderEmpty,
        ErrorCode::OrderItemInvalidQuantity,
        ErrorCode::OrderItemMissingName,
        ErrorCode::ClientTokenMissing,
        ErrorCode::InternalError,
    ];

    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Default English message, used when no custom one is given
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::Success => "OK",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order must contain at least one item",
            ErrorCode::OrderItemInvalidQuantity => "Item quantity must be at least 1",
            ErrorCode::OrderItemMissingName => "Item pizzaType must not be empty",
            ErrorCode::ClientTokenMissing => "clientId query parameter is required",
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that is not one of [`ErrorCode::ALL`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ErrorCode::ALL
            .into_iter()
            .find(|c| c.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}
