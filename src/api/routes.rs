//! API Route Configuration

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::middleware::logging_middleware;

/// Create the router with all routes and middleware
pub fn create_router() -> Router {
    Router::new()
        // Classification
        .route("/api/:number", get(handlers::classify_number))
        // Single-rule checks
        .route("/api/fizz/:number", get(handlers::check_fizz))
        .route("/api/buzz/:number", get(handlers::check_buzz))
        .route("/api/fizzbuzz/:number", get(handlers::check_fizzbuzz))
        // Landing page; any other GET path gets it too, other methods get 405
        .route("/", get(handlers::index))
        .fallback_service(get(handlers::index))
        // Middleware (order matters - bottom runs first)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
}
