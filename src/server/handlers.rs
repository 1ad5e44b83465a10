//! Request handlers for the demo routes

use crate::core::validation::{PageQuery, ValidId, ValidUser};
use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

/// GET /
pub async fn root() -> &'static str {
    "Hello, World!"
}

/// GET /hello
pub async fn hello() -> &'static str {
    "Hello world"
}

/// GET /evening
pub async fn evening() -> &'static str {
    "Good evening"
}

/// GET /users/{id}
///
/// Validation has already coerced `id` to a positive integer by the time this
/// runs; invalid ids never reach here.
pub async fn get_user(ValidId(id): ValidId) -> Json<Value> {
    Json(json!({
        "success": true,
        "id": id,
    }))
}

/// POST /users
pub async fn create_user(ValidUser(user): ValidUser) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "user": user,
        })),
    )
}

/// GET /users
pub async fn list_users(pagination: PageQuery) -> Json<Value> {
    let page = pagination.page.unwrap_or(1);
    let limit = pagination.limit.unwrap_or(10);
    Json(json!({
        "success": true,
        "page": page,
        "limit": limit,
        "users": [],
    }))
}
