//! Error codes carried in every error envelope.
//!
//! `error` is the stable name clients branch on, `code` the number logged
//! alongside it. Client errors live in 1000-1999.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Missing, mistyped or out-of-range fields
    ValidationError,
    /// Body could not be read as JSON (wrong content type, too large)
    JsonExtraction,
    NotFound,
    /// Body is not syntactically valid JSON
    InvalidJson,
    MethodNotAllowed,
    InternalError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 6] = [
        Self::ValidationError,
        Self::JsonExtraction,
        Self::NotFound,
        Self::InvalidJson,
        Self::MethodNotAllowed,
        Self::InternalError,
    ];

    /// (wire name, numeric code, default message)
    const fn entry(self) -> (&'static str, i32, &'static str) {
        match self {
            Self::ValidationError => ("VALIDATION_ERROR", 1001, "Request validation failed"),
            Self::JsonExtraction => ("JSON_EXTRACTION", 1003, "Failed to parse request body"),
            Self::NotFound => ("NOT_FOUND", 1004, "Resource not found"),
            Self::InternalError => ("INTERNAL_ERROR", 1005, "An internal server error occurred"),
            Self::InvalidJson => ("INVALID_JSON", 1010, "Invalid JSON format"),
            Self::MethodNotAllowed => (
                "METHOD_NOT_ALLOWED",
                1012,
                "The HTTP method is not allowed for this resource",
            ),
        }
    }

    /// Name sent to clients in the `error` field
    pub fn as_str(&self) -> &'static str {
        self.entry().0
    }

    pub fn code(&self) -> i32 {
        self.entry().1
    }

    /// Message used when the error carries no more specific one
    pub fn default_message(&self) -> &'static str {
        self.entry().2
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
