//! Router assembly for the demo application
//!
//! Routes:
//! - GET  /            - "Hello, World!"
//! - GET  /hello       - "Hello world"
//! - GET  /evening     - "Good evening"
//! - GET  /users       - list users (validated pagination)
//! - POST /users       - create user (validated body)
//! - GET  /users/{id}  - get user (validated id)

use super::handlers::{create_user, evening, get_user, hello, list_users, root};
use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router with tracing and CORS layers
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/hello", get(hello))
        .route("/evening", get(evening))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
