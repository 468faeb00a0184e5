//! Punchcard server library.
//!
//! A loyalty check-in service: customers register implicitly on their first
//! check-in, earn a fixed number of points per visit, and can query their
//! balance and history. State lives in memory for the lifetime of the process.
//!
//! This crate provides the server as a library so that the router can be
//! exercised in-process by tests and by the `integration-tests` crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use axum::Router;
use axum::extract::Request;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use state::AppState;
pub use store::LoyaltyStore;

/// Build the application router with its middleware stack.
///
/// # Middleware Order (outermost first)
///
/// 1. CORS (any origin, as the API is called from browser frontends)
/// 2. `TraceLayer` (one span per request)
/// 3. Request ID (recorded on the request span and echoed in responses)
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
