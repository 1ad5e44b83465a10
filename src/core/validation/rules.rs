//! Declarative field rule descriptions
//!
//! A rule is plain data: where the field lives, whether it is required, how to
//! coerce it, and which sanitizers run around the check. A single generic
//! evaluator interprets rule lists; there is no registry and no shared state.

use super::sanitizers::Sanitizer;

/// Where a field is read from on the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Path parameter (e.g. `/users/{id}`)
    Param,
    /// JSON body field
    Body,
    /// Query-string parameter
    Query,
}

/// Coercion target and bound constraints for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Must parse as an integer within the optional bounds; coerced to a
    /// JSON number on success
    Integer { min: Option<i64>, max: Option<i64> },
    /// Must be a string whose character count falls within the bounds
    Text { min_len: usize, max_len: usize },
    /// Must match a valid email-address grammar
    Email,
}

/// The complete contract for one request field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field name, as it appears on the request and in failure reports
    pub name: &'static str,
    pub source: FieldSource,
    /// Failure message when the field is required but absent; `None` makes
    /// the field optional (absent fields record nothing and coerce nothing)
    pub required: Option<&'static str>,
    pub kind: FieldKind,
    /// Failure message when the kind check rejects the value
    pub invalid_message: &'static str,
    /// Sanitizers applied before the presence and kind checks
    pub pre_sanitize: &'static [Sanitizer],
    /// Sanitizers applied after the kind check passes
    pub post_sanitize: &'static [Sanitizer],
}
