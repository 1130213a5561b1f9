//! GET / and GET /health, plus JSON bodies for unknown routes (404) and
//! unsupported methods (405).

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use serde_json::json;

use crate::catalog::CatalogKind;
use crate::config::SERVICE_ID;
use crate::router::{
    display_route, AppState, CONTACTS_ROUTE, HEALTH_ROUTE, POLICIES_ROUTE, PROCEDURES_ROUTE,
};

pub const SERVICE_NAME: &str = "Corporate Information API";
pub const SERVICE_DESCRIPTION: &str = "Sistema de información corporativa";

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Endpoints,
    pub available_data: AvailableData,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub policies: String,
    pub procedures: String,
    pub contacts: String,
    pub health: String,
}

/// Entry counts per catalog
#[derive(Debug, Serialize)]
pub struct AvailableData {
    pub policies: usize,
    pub procedures: usize,
    pub contacts: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub port: u16,
}

/// GET / - service metadata and loaded entry counts
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    let catalogs = &state.catalogs;

    Json(ServiceInfo {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        description: SERVICE_DESCRIPTION,
        endpoints: Endpoints {
            policies: display_route(POLICIES_ROUTE),
            procedures: display_route(PROCEDURES_ROUTE),
            contacts: display_route(CONTACTS_ROUTE),
            health: display_route(HEALTH_ROUTE),
        },
        available_data: AvailableData {
            policies: catalogs.get(CatalogKind::Policies).len(),
            procedures: catalogs.get(CatalogKind::Procedures).len(),
            contacts: catalogs.get(CatalogKind::Contacts).len(),
        },
    })
}

/// GET /health - always healthy, whatever the catalogs hold
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_ID,
        port: state.port,
    })
}

pub async fn route_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

pub async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
}
