//! Check-in handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use punchcard_core::{CustomerId, POINTS_PER_CHECKIN, Points, number_to_string};

use crate::error::{AppError, Result};
use crate::models::CheckinEvent;
use crate::state::AppState;

/// Request body for `POST /api/checkin`.
///
/// Fields are read by key from a JSON object so that numeric and string IDs
/// are both accepted and normalized by [`CustomerId::from_json_opt`]. Any body
/// that is not an object carries no fields.
#[derive(Debug, Default)]
pub struct CheckinRequest {
    pub customer_id: Option<Value>,
    pub customer_name: Option<Value>,
}

impl CheckinRequest {
    /// Read `clienteId` and `clienteNome` from a decoded JSON body.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return Self::default();
        };
        Self {
            customer_id: fields.remove("clienteId"),
            customer_name: fields.remove("clienteNome"),
        }
    }

    /// The display name, if one was given as a non-empty string or a
    /// non-zero number.
    fn name(&self) -> Option<String> {
        match self.customer_name.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => number_to_string(n),
            _ => None,
        }
    }
}

/// Response for a successful check-in.
#[derive(Debug, Serialize)]
pub struct CheckinResponse {
    pub success: bool,
    pub message: String,
    pub checkin: CheckinEvent,
    #[serde(rename = "totalPontos")]
    pub total_points: Points,
}

/// Record a check-in, registering the customer on first sight.
///
/// A request without a JSON content type, or whose JSON body is not an object,
/// is treated like an empty body, so it fails on the missing `clienteId`.
///
/// # Errors
///
/// Returns a 400 if `clienteId` is missing or unusable, or if the body is not
/// valid JSON. Returns a 500 if the store is unavailable.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<CheckinResponse>> {
    let request = match payload {
        Ok(Json(body)) => CheckinRequest::from_body(body),
        Err(JsonRejection::MissingJsonContentType(_)) => CheckinRequest::default(),
        Err(rejection) => return Err(AppError::BadRequest(rejection.body_text())),
    };

    let customer_id = CustomerId::from_json_opt(request.customer_id.as_ref())?;
    let receipt = state
        .store()
        .record_checkin(customer_id, request.name(), Utc::now())?;

    tracing::info!(
        customer_id = %receipt.checkin.customer_id,
        checkin_id = %receipt.checkin.id,
        total_points = %receipt.total_points,
        new_customer = receipt.customer_created,
        "Check-in recorded"
    );
    if let Ok(stats) = state.store().stats() {
        tracing::debug!(
            customers = stats.customers,
            checkins = stats.checkins,
            "Store size"
        );
    }

    Ok(Json(CheckinResponse {
        success: true,
        message: format!("Check-in realizado! +{POINTS_PER_CHECKIN} pontos"),
        checkin: receipt.checkin,
        total_points: receipt.total_points,
    }))
}
