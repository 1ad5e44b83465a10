//! Declarative request validation
//!
//! Rules are plain data ([`rules`]), grouped into per-route chains
//! ([`chains`]), interpreted by one generic evaluator ([`evaluator`]), and
//! gated into a terminal outcome ([`gate`]). The [`extractor`] module wires
//! the chains into axum so handlers receive already-coerced values.

pub mod chains;
pub mod evaluator;
pub mod extractor;
pub mod gate;
pub mod rules;
pub mod sanitizers;

pub use evaluator::{ErrorAccumulator, Evaluation, RequestInput, evaluate};
pub use extractor::{NewUser, PageQuery, ValidId, ValidUser};
pub use gate::check;
pub use rules::{FieldKind, FieldRule, FieldSource};
pub use sanitizers::Sanitizer;
