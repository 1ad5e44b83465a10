//! # hello-api
//!
//! A minimal HTTP demo service: a few static greeting routes plus a set of
//! validated resource routes demonstrating declarative request validation.
//!
//! ## Design
//!
//! Validation rules are stateless data structures (no global registry, no
//! method-chained configuration): each route declares a list of
//! [`FieldRule`](core::validation::FieldRule)s, a single generic evaluator
//! interprets them into an ordered accumulator of failures, and one gate
//! converts the accumulator into a terminal outcome per request — either
//! advance with coerced values or reject with HTTP 400 and the envelope
//! `{"success": false, "error": "Validation failed", "errors": [...]}`.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use hello_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = build_router();
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::ServerConfig;
    pub use crate::core::error::{ValidationFailure, ValidationRejection};
    pub use crate::core::validation::{
        ErrorAccumulator, Evaluation, FieldKind, FieldRule, FieldSource, NewUser, PageQuery,
        RequestInput, Sanitizer, ValidId, ValidUser, check, evaluate,
    };
    pub use crate::server::build_router;
}
