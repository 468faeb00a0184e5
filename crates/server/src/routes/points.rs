//! Customer points handler.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use punchcard_core::CustomerId;

use crate::error::Result;
use crate::state::AppState;
use crate::store::CustomerPoints;

/// Show the balance and check-in history for a customer ID.
///
/// The ID is not checked against registered customers: unknown IDs get a zero
/// balance and an empty history rather than a 404.
///
/// # Errors
///
/// Returns an error if the store is unavailable.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerPoints>> {
    let points = state.store().points_for(&CustomerId::from(customer_id))?;
    Ok(Json(points))
}
