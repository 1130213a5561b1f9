//! Router construction for the corporate API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::catalog::Catalogs;
use crate::handlers;

pub const POLICIES_ROUTE: &str = "/api/policies/:category";
pub const PROCEDURES_ROUTE: &str = "/api/procedures/:name";
pub const CONTACTS_ROUTE: &str = "/api/contacts/:department";
pub const HEALTH_ROUTE: &str = "/health";

/// Route in `{param}` form, as advertised by `GET /`
pub fn display_route(route: &str) -> String {
    route
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(param) => format!("{{{}}}", param),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalogs: Arc<Catalogs>,
    /// Port reported by `/health`
    pub port: u16,
}

impl AppState {
    pub fn new(catalogs: Catalogs, port: u16) -> Self {
        Self {
            catalogs: Arc::new(catalogs),
            port,
        }
    }
}

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::info::root))
        .route(HEALTH_ROUTE, get(handlers::info::health))
        // Catalog lookups
        .route(POLICIES_ROUTE, get(handlers::lookup::get_policy))
        .route(PROCEDURES_ROUTE, get(handlers::lookup::get_procedure))
        .route(CONTACTS_ROUTE, get(handlers::lookup::get_contact))
        // Must follow the routes it applies to
        .method_not_allowed_fallback(handlers::info::method_not_allowed)
        .fallback(handlers::info::route_not_found)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
