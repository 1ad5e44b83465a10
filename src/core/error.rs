//! Typed error handling for the hello-api service
//!
//! Validation failures are the only error category that reaches clients: they
//! accumulate per request and are rendered once, in bulk, as an HTTP 400
//! envelope. Nothing in this module panics or returns a 500 for bad input.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use std::fmt;

/// A single field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Rejection produced when a request carries one or more validation failures
///
/// Renders as HTTP 400 with the envelope
/// `{"success": false, "error": "Validation failed", "errors": [...]}`,
/// preserving the order in which failures were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRejection {
    failures: Vec<ValidationFailure>,
}

impl ValidationRejection {
    pub fn new(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }
}

impl fmt::Display for ValidationRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self.failures.iter().map(|e| e.to_string()).collect();
        write!(f, "Validation failed: {}", msgs.join(", "))
    }
}

impl std::error::Error for ValidationRejection {}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "Validation failed",
                "errors": self.failures,
            })),
        )
            .into_response()
    }
}
