//! Generic rule evaluator
//!
//! Interprets a list of [`FieldRule`]s against the raw request fields. Each
//! field runs pre-sanitizers, the presence check, the kind check with
//! coercion, then post-sanitizers, bailing out of its own remaining steps on
//! the first failure while the other fields keep evaluating. Failures only
//! accumulate; nothing here panics or returns early for bad input.

use super::rules::{FieldKind, FieldRule, FieldSource};
use crate::core::error::ValidationFailure;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::HashMap;
use validator::ValidateEmail;

/// Raw request fields, grouped by source
///
/// Path and query parameters arrive as strings; the body is whatever JSON
/// object the client sent (non-object bodies read as all-fields-absent).
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    pub params: Map<String, Value>,
    pub query: Map<String, Value>,
    pub body: Map<String, Value>,
}

impl RequestInput {
    pub fn from_path_params(params: HashMap<String, String>) -> Self {
        Self {
            params: to_string_map(params),
            ..Self::default()
        }
    }

    pub fn from_query(query: HashMap<String, String>) -> Self {
        Self {
            query: to_string_map(query),
            ..Self::default()
        }
    }

    pub fn from_body(body: Value) -> Self {
        Self {
            body: match body {
                Value::Object(map) => map,
                _ => Map::new(),
            },
            ..Self::default()
        }
    }

    fn get(&self, source: FieldSource, name: &str) -> Option<&Value> {
        match source {
            FieldSource::Param => self.params.get(name),
            FieldSource::Query => self.query.get(name),
            FieldSource::Body => self.body.get(name),
        }
    }
}

fn to_string_map(map: HashMap<String, String>) -> Map<String, Value> {
    map.into_iter().map(|(k, v)| (k, Value::String(v))).collect()
}

/// Request-scoped ordered list of validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorAccumulator {
    failures: Vec<ValidationFailure>,
}

impl ErrorAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.failures.push(ValidationFailure::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.failures.iter()
    }

    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.failures
    }
}

/// Outcome of evaluating one rule list against one request
///
/// `values` holds the coerced and sanitized value of every field that passed,
/// in rule order. Absent optional fields appear in neither collection.
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    pub values: IndexMap<String, Value>,
    pub errors: ErrorAccumulator,
}

/// Evaluate a rule list against the raw request fields
pub fn evaluate(rules: &[FieldRule], input: &RequestInput) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for rule in rules {
        let raw = input.get(rule.source, rule.name).cloned().map(|value| {
            rule.pre_sanitize
                .iter()
                .fold(value, |value, sanitizer| sanitizer.apply(value))
        });

        let value = match raw {
            Some(value) if !is_blank(&value) => value,
            _ => {
                if let Some(message) = rule.required {
                    evaluation.errors.push(rule.name, message);
                }
                continue;
            }
        };

        match check_kind(&rule.kind, &value) {
            Some(coerced) => {
                let finished = rule
                    .post_sanitize
                    .iter()
                    .fold(coerced, |value, sanitizer| sanitizer.apply(value));
                evaluation.values.insert(rule.name.to_string(), finished);
            }
            None => evaluation.errors.push(rule.name, rule.invalid_message),
        }
    }

    evaluation
}

/// Absent for validation purposes: missing, null, or empty string
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Run the kind check, returning the coerced value on success
fn check_kind(kind: &FieldKind, value: &Value) -> Option<Value> {
    match kind {
        FieldKind::Integer { min, max } => {
            let n = parse_integer(value)?;
            if min.is_some_and(|min| n < min) || max.is_some_and(|max| n > max) {
                return None;
            }
            Some(Value::from(n))
        }
        FieldKind::Text { min_len, max_len } => {
            let s = value.as_str()?;
            let len = s.chars().count();
            if len < *min_len || len > *max_len {
                return None;
            }
            Some(value.clone())
        }
        FieldKind::Email => {
            let s = value.as_str()?;
            if !s.validate_email() {
                return None;
            }
            Some(value.clone())
        }
    }
}

/// Accept JSON integers and strings that parse as integers; reject floats
fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::chains::{id_rules, pagination_rules, user_rules};
    use serde_json::json;
    use std::collections::HashMap;

    fn params(pairs: &[(&str, &str)]) -> RequestInput {
        RequestInput::from_path_params(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    fn query(pairs: &[(&str, &str)]) -> RequestInput {
        RequestInput::from_query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    // === id chain ===

    #[test]
    fn test_id_missing_records_required_failure() {
        let evaluation = evaluate(&id_rules(), &params(&[]));
        assert_eq!(evaluation.errors.len(), 1);
        let failure = evaluation.errors.iter().next().unwrap();
        assert_eq!(failure.field, "id");
        assert_eq!(failure.message, "ID parameter is required");
    }

    #[test]
    fn test_id_numeric_string_coerced_to_integer() {
        let evaluation = evaluate(&id_rules(), &params(&[("id", "42")]));
        assert!(evaluation.errors.is_empty());
        assert_eq!(evaluation.values.get("id"), Some(&json!(42)));
    }

    #[test]
    fn test_id_zero_rejected() {
        let evaluation = evaluate(&id_rules(), &params(&[("id", "0")]));
        let failure = evaluation.errors.iter().next().unwrap();
        assert_eq!(failure.message, "ID must be a positive integer");
    }

    #[test]
    fn test_id_negative_rejected() {
        let evaluation = evaluate(&id_rules(), &params(&[("id", "-7")]));
        assert_eq!(evaluation.errors.len(), 1);
    }

    #[test]
    fn test_id_non_numeric_rejected() {
        let evaluation = evaluate(&id_rules(), &params(&[("id", "abc")]));
        let failure = evaluation.errors.iter().next().unwrap();
        assert_eq!(failure.message, "ID must be a positive integer");
    }

    #[test]
    fn test_id_float_string_rejected() {
        let evaluation = evaluate(&id_rules(), &params(&[("id", "4.2")]));
        assert_eq!(evaluation.errors.len(), 1);
    }

    #[test]
    fn test_id_empty_string_reads_as_absent() {
        let evaluation = evaluate(&id_rules(), &params(&[("id", "")]));
        let failure = evaluation.errors.iter().next().unwrap();
        assert_eq!(failure.message, "ID parameter is required");
    }

    // === user chain ===

    #[test]
    fn test_user_valid_payload_passes() {
        let input = RequestInput::from_body(json!({
            "name": "Alice",
            "email": "alice@example.com",
        }));
        let evaluation = evaluate(&user_rules(), &input);
        assert!(evaluation.errors.is_empty());
        assert_eq!(evaluation.values.get("name"), Some(&json!("Alice")));
        assert_eq!(
            evaluation.values.get("email"),
            Some(&json!("alice@example.com"))
        );
    }

    #[test]
    fn test_user_missing_both_fields_accumulates_in_order() {
        let evaluation = evaluate(&user_rules(), &RequestInput::from_body(json!({})));
        let messages: Vec<&str> = evaluation
            .errors
            .iter()
            .map(|f| f.message.as_str())
            .collect();
        assert_eq!(messages, vec!["Name is required", "Email is required"]);
    }

    #[test]
    fn test_user_single_char_name_rejected_with_length_message() {
        let input = RequestInput::from_body(json!({
            "name": "A",
            "email": "a@example.com",
        }));
        let evaluation = evaluate(&user_rules(), &input);
        assert_eq!(evaluation.errors.len(), 1);
        let failure = evaluation.errors.iter().next().unwrap();
        assert_eq!(failure.field, "name");
        assert_eq!(failure.message, "Name must be between 2 and 50 characters");
    }

    #[test]
    fn test_user_name_trimmed_then_escaped() {
        let input = RequestInput::from_body(json!({
            "name": "  <Bob> & Co  ",
            "email": "bob@example.com",
        }));
        let evaluation = evaluate(&user_rules(), &input);
        assert!(evaluation.errors.is_empty());
        assert_eq!(
            evaluation.values.get("name"),
            Some(&json!("&lt;Bob&gt; &amp; Co"))
        );
    }

    #[test]
    fn test_user_whitespace_only_name_is_required_failure() {
        // trim runs before the presence check
        let input = RequestInput::from_body(json!({
            "name": "   ",
            "email": "a@example.com",
        }));
        let evaluation = evaluate(&user_rules(), &input);
        let failure = evaluation.errors.iter().next().unwrap();
        assert_eq!(failure.message, "Name is required");
    }

    #[test]
    fn test_user_name_bails_after_first_failure() {
        // one failure per field, even when later checks would also fail
        let evaluation = evaluate(&user_rules(), &RequestInput::from_body(json!({})));
        assert_eq!(evaluation.errors.len(), 2);
    }

    #[test]
    fn test_user_invalid_email_rejected() {
        let input = RequestInput::from_body(json!({
            "name": "Alice",
            "email": "not-an-email",
        }));
        let evaluation = evaluate(&user_rules(), &input);
        let failure = evaluation.errors.iter().next().unwrap();
        assert_eq!(failure.field, "email");
        assert_eq!(failure.message, "Valid email address is required");
    }

    #[test]
    fn test_user_email_normalized_keeps_local_part() {
        let input = RequestInput::from_body(json!({
            "name": "Alice",
            "email": "User.Name+tag@Example.com",
        }));
        let evaluation = evaluate(&user_rules(), &input);
        assert!(evaluation.errors.is_empty());
        assert_eq!(
            evaluation.values.get("email"),
            Some(&json!("User.Name+tag@example.com"))
        );
    }

    #[test]
    fn test_user_non_object_body_reads_as_absent_fields() {
        let evaluation = evaluate(&user_rules(), &RequestInput::from_body(json!("nonsense")));
        assert_eq!(evaluation.errors.len(), 2);
    }

    // === pagination chain ===

    #[test]
    fn test_pagination_absent_fields_record_nothing() {
        let evaluation = evaluate(&pagination_rules(), &query(&[]));
        assert!(evaluation.errors.is_empty());
        assert!(evaluation.values.is_empty());
    }

    #[test]
    fn test_pagination_both_present_coerced() {
        let evaluation = evaluate(&pagination_rules(), &query(&[("page", "3"), ("limit", "10")]));
        assert!(evaluation.errors.is_empty());
        assert_eq!(evaluation.values.get("page"), Some(&json!(3)));
        assert_eq!(evaluation.values.get("limit"), Some(&json!(10)));
    }

    #[test]
    fn test_pagination_limit_over_100_rejected() {
        let evaluation = evaluate(&pagination_rules(), &query(&[("limit", "101")]));
        let failure = evaluation.errors.iter().next().unwrap();
        assert_eq!(
            failure.message,
            "Limit must be an integer between 1 and 100"
        );
    }

    #[test]
    fn test_pagination_limit_zero_rejected() {
        let evaluation = evaluate(&pagination_rules(), &query(&[("limit", "0")]));
        assert_eq!(evaluation.errors.len(), 1);
    }

    #[test]
    fn test_pagination_page_zero_rejected() {
        let evaluation = evaluate(&pagination_rules(), &query(&[("page", "0")]));
        let failure = evaluation.errors.iter().next().unwrap();
        assert_eq!(failure.message, "Page must be a positive integer");
    }

    #[test]
    fn test_pagination_non_numeric_page_rejected() {
        let evaluation = evaluate(&pagination_rules(), &query(&[("page", "two")]));
        assert_eq!(evaluation.errors.len(), 1);
    }

    // === evaluator internals ===

    #[test]
    fn test_parse_integer_accepts_json_number() {
        assert_eq!(parse_integer(&json!(7)), Some(7));
    }

    #[test]
    fn test_parse_integer_rejects_float() {
        assert_eq!(parse_integer(&json!(7.5)), None);
    }

    #[test]
    fn test_parse_integer_trims_string() {
        assert_eq!(parse_integer(&json!(" 12 ")), Some(12));
    }

    #[test]
    fn test_is_blank_null_and_empty_string() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!("")));
        assert!(!is_blank(&json!("x")));
        assert!(!is_blank(&json!(0)));
    }
}
