//! Service information handler.

use axum::Json;
use serde::Serialize;

/// Response for `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

/// Documented public endpoints.
#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub checkin: &'static str,
    pub clientes: &'static str,
    pub pontos: &'static str,
}

/// Return static service metadata.
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "✅ Sistema de Check-in e Fidelidade Online!",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            checkin: "POST /api/checkin",
            clientes: "GET /api/clientes",
            pontos: "GET /api/pontos/:clienteId",
        },
    })
}
