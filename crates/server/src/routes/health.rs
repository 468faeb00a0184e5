//! Health check handler.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use punchcard_core::iso_millis;

/// Response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

/// Liveness health check.
///
/// Returns "OK" if the server is running. There are no dependencies to check.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "OK",
        timestamp: Utc::now(),
    })
}
