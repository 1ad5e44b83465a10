//! HTTP surface: route handlers and router assembly

pub mod handlers;
pub mod router;

pub use router::build_router;
