//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Service info and endpoint list
//! GET  /health                  - Health check
//!
//! # Loyalty API
//! POST /api/checkin             - Record a check-in (+10 points)
//! GET  /api/clientes            - List customers with balances
//! GET  /api/pontos/{clienteId}  - Balance and history for one customer
//! GET  /api/resumo              - Customer count, weekly activity, latest check-ins
//! ```
//!
//! Anything else falls through to [`not_found`].

pub mod checkin;
pub mod customers;
pub mod health;
pub mod home;
pub mod points;
pub mod summary;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the loyalty API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/checkin", post(checkin::create))
        .route("/clientes", get(customers::index))
        .route("/pontos/{customer_id}", get(points::show))
        .route("/resumo", get(summary::show))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .nest("/api", api_routes())
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
