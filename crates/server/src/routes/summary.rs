//! Dashboard summary handler.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::error::Result;
use crate::state::AppState;
use crate::store::StoreSummary;

/// Customer count, check-ins in the last week, and the latest check-ins.
///
/// # Errors
///
/// Returns an error if the store is unavailable.
pub async fn show(State(state): State<AppState>) -> Result<Json<StoreSummary>> {
    Ok(Json(state.store().summary(Utc::now())?))
}
