//! Stable error codes shared by every layer.
//!
//! Each error type reports a machine-readable code alongside its `Display`
//! message. The HTTP boundary renders both into the response body.

use serde::{Deserialize, Serialize};

pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// JSON error body returned by the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

impl ErrorBody {
    pub fn from_error(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self { code: err.error_code().to_owned(), message: err.to_string(), retryable: err.retryable() }
    }
}
