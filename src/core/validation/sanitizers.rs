//! Reusable field sanitizers
//!
//! Sanitizers transform field values around the constraint checks. Non-string
//! values pass through unchanged (another check will reject them if needed).

use serde_json::Value;

/// A value transformation applied by the rule evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sanitizer {
    /// Strip surrounding whitespace
    Trim,
    /// Escape HTML-significant characters for safe storage/rendering
    EscapeHtml,
    /// Canonicalize an email address without touching the local part
    NormalizeEmail,
}

impl Sanitizer {
    pub fn apply(&self, value: Value) -> Value {
        match self {
            Sanitizer::Trim => trim(value),
            Sanitizer::EscapeHtml => escape_html(value),
            Sanitizer::NormalizeEmail => normalize_email(value),
        }
    }
}

/// Sanitizer: trim whitespace from string
pub fn trim(value: Value) -> Value {
    if let Some(s) = value.as_str() {
        Value::String(s.trim().to_string())
    } else {
        value
    }
}

/// Sanitizer: escape HTML-significant characters
pub fn escape_html(value: Value) -> Value {
    if let Some(s) = value.as_str() {
        let mut escaped = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#x27;"),
                '/' => escaped.push_str("&#x2F;"),
                '\\' => escaped.push_str("&#x5C;"),
                '`' => escaped.push_str("&#96;"),
                _ => escaped.push(c),
            }
        }
        Value::String(escaped)
    } else {
        value
    }
}

/// Sanitizer: lower-case the domain of an email address
///
/// The local part is kept verbatim: dots and `+tag` sub-addresses are
/// significant to some providers, so they are never stripped or re-cased.
pub fn normalize_email(value: Value) -> Value {
    if let Some(s) = value.as_str() {
        match s.rsplit_once('@') {
            Some((local, domain)) => {
                Value::String(format!("{}@{}", local, domain.to_lowercase()))
            }
            None => value.clone(),
        }
    } else {
        value
    }
}
