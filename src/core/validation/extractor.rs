//! Axum extractors for validated request fields
//!
//! Each extractor runs one rule chain and the result gate, so handlers only
//! ever observe coerced, sanitized values. The rejection path is the gate's
//! 400 envelope; nothing here can turn bad input into a 500.

use super::chains::{id_rules, pagination_rules, user_rules};
use super::evaluator::{RequestInput, evaluate};
use super::gate::check;
use crate::core::error::{ValidationFailure, ValidationRejection};
use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A validated, coerced `id` path parameter
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn get_user(ValidId(id): ValidId) -> Json<Value> {
///     // id is already a positive integer
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();

        let evaluation = evaluate(&id_rules(), &RequestInput::from_path_params(params));
        let values = check(evaluation).map_err(IntoResponse::into_response)?;

        match values.get("id").and_then(Value::as_i64) {
            Some(id) => Ok(ValidId(id)),
            // unreachable once the gate passes; kept as a rejection, not a panic
            None => Err(ValidationRejection::new(vec![ValidationFailure::new(
                "id",
                "ID must be a positive integer",
            )])
            .into_response()),
        }
    }
}

/// A validated user creation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    /// Trimmed and HTML-escaped
    pub name: String,
    /// Grammar-checked, domain lower-cased, local part verbatim
    pub email: String,
}

/// Extractor wrapping [`NewUser`]
///
/// Bodies that are not JSON objects read as all-fields-absent, so they reject
/// with the same required-field envelope as an empty object.
#[derive(Debug, Clone)]
pub struct ValidUser(pub NewUser);

impl<S> FromRequest<S> for ValidUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Json::<Value>::from_request(req, state).await {
            Ok(Json(body)) => body,
            Err(_) => Value::Null,
        };

        let evaluation = evaluate(&user_rules(), &RequestInput::from_body(body));
        let values = check(evaluation).map_err(IntoResponse::into_response)?;

        let field = |name: &str| {
            values
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Ok(ValidUser(NewUser {
            name: field("name"),
            email: field("email"),
        }))
    }
}

/// Validated pagination query parameters
///
/// Absent fields stay `None`; downstream code supplies its own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map(|Query(query)| query)
            .unwrap_or_default();

        let evaluation = evaluate(&pagination_rules(), &RequestInput::from_query(query));
        let values = check(evaluation).map_err(IntoResponse::into_response)?;

        Ok(PageQuery {
            page: values.get("page").and_then(Value::as_u64),
            limit: values.get("limit").and_then(Value::as_u64),
        })
    }
}
