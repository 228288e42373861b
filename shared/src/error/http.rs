use http::StatusCode;

use super::category::ErrorCategory;
use super::codes::ErrorCode;

impl ErrorCode {
    /// Status sent with this code: 404 for unknown orders, 500 for server
    /// faults, 400 for everything the caller got wrong
    pub fn http_status(self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,
            ErrorCode::OrderNotFound => StatusCode::NOT_FOUND,
            code if code.category() == ErrorCategory::System => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
