//! Error category, derived from the code range

use serde::{Deserialize, Serialize};

use super::codes::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Order,
    Feed,
    /// Server-side faults; these are logged at `error` when returned
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            0 => Self::General,
            4 => Self::Order,
            5 => Self::Feed,
            _ => Self::System,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Order => "order",
            Self::Feed => "feed",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    pub fn category(self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
