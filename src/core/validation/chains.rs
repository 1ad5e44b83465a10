//! Rule chains for the demo routes
//!
//! Three independently invocable rule lists: the `id` path parameter, the
//! user creation body, and the pagination query parameters.

use super::rules::{FieldKind, FieldRule, FieldSource};
use super::sanitizers::Sanitizer;

/// Rules for the `id` path parameter: required, positive integer
pub fn id_rules() -> Vec<FieldRule> {
    vec![FieldRule {
        name: "id",
        source: FieldSource::Param,
        required: Some("ID parameter is required"),
        kind: FieldKind::Integer {
            min: Some(1),
            max: None,
        },
        invalid_message: "ID must be a positive integer",
        pre_sanitize: &[],
        post_sanitize: &[],
    }]
}

/// Rules for the user creation body: `name` and `email`, both required
///
/// `name` is trimmed before the presence and length checks and HTML-escaped
/// once it passes. `email` is normalized after the grammar check; the local
/// part is preserved verbatim.
pub fn user_rules() -> Vec<FieldRule> {
    vec![
        FieldRule {
            name: "name",
            source: FieldSource::Body,
            required: Some("Name is required"),
            kind: FieldKind::Text {
                min_len: 2,
                max_len: 50,
            },
            invalid_message: "Name must be between 2 and 50 characters",
            pre_sanitize: &[Sanitizer::Trim],
            post_sanitize: &[Sanitizer::EscapeHtml],
        },
        FieldRule {
            name: "email",
            source: FieldSource::Body,
            required: Some("Email is required"),
            kind: FieldKind::Email,
            invalid_message: "Valid email address is required",
            pre_sanitize: &[],
            post_sanitize: &[Sanitizer::NormalizeEmail],
        },
    ]
}

/// Rules for pagination query parameters: both optional, coerced when present
pub fn pagination_rules() -> Vec<FieldRule> {
    vec![
        FieldRule {
            name: "page",
            source: FieldSource::Query,
            required: None,
            kind: FieldKind::Integer {
                min: Some(1),
                max: None,
            },
            invalid_message: "Page must be a positive integer",
            pre_sanitize: &[],
            post_sanitize: &[],
        },
        FieldRule {
            name: "limit",
            source: FieldSource::Query,
            required: None,
            kind: FieldKind::Integer {
                min: Some(1),
                max: Some(100),
            },
            invalid_message: "Limit must be an integer between 1 and 100",
            pre_sanitize: &[],
            post_sanitize: &[],
        },
    ]
}
