//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// API v1 routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new().nest("/threads", thread_routes(state))
}

/// Thread and comment routes. Reading a thread is public; every mutation
/// requires a bearer token.
fn thread_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::thread::create_thread))
        .route(
            "/{thread_id}/comments",
            post(handlers::comment::create_comment),
        )
        .route(
            "/{thread_id}/comments/{comment_id}",
            delete(handlers::comment::delete_comment),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
        .route("/{thread_id}", get(handlers::thread::get_thread))
}
