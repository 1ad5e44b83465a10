//! Validation result gate
//!
//! The single place that inspects the accumulator: an empty accumulator lets
//! the request advance with the coerced values, a non-empty one terminates it
//! with the 400 envelope. Read-only over the accumulator; never panics.

use super::evaluator::Evaluation;
use crate::core::error::ValidationRejection;
use indexmap::IndexMap;
use serde_json::Value;

/// Convert an evaluation into its terminal outcome
///
/// `Ok` carries the coerced values for downstream consumers; `Err` renders as
/// HTTP 400 with every accumulated failure, in accumulation order.
pub fn check(evaluation: Evaluation) -> Result<IndexMap<String, Value>, ValidationRejection> {
    let Evaluation { values, errors } = evaluation;
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(ValidationRejection::new(errors.into_failures()))
    }
}
