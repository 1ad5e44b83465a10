//! Core domain logic: validation rules and error types

pub mod error;
pub mod validation;

pub use error::{ValidationFailure, ValidationRejection};
