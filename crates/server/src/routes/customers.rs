//! Customer listing handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;
use crate::store::CustomerSummary;

/// Response for `GET /api/clientes`.
#[derive(Debug, Serialize)]
pub struct CustomerList {
    #[serde(rename = "clientes")]
    pub customers: Vec<CustomerSummary>,
}

/// List every registered customer with their balance, in registration order.
///
/// # Errors
///
/// Returns an error if the store is unavailable.
pub async fn index(State(state): State<AppState>) -> Result<Json<CustomerList>> {
    let customers = state.store().customers()?;
    Ok(Json(CustomerList { customers }))
}
