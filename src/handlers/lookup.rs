//! GET /api/{policies,procedures,contacts}/:key - catalog lookups.
//!
//! The path parameter is normalized before matching. A hit echoes the
//! caller's original identifier next to the stored record; a miss is an
//! `ApiError::NotFound` listing every key of the catalog so the caller can
//! retry with a valid one.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::request::Parts,
    response::Json,
};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use tracing::{info, warn};

use crate::catalog::{CatalogKind, Catalogs};
use crate::error::ApiError;
use crate::router::AppState;

/// Trailing path segment, percent-decoded leniently.
///
/// Invalid UTF-8 becomes U+FFFD instead of a rejection, so any identifier
/// ends in a lookup (and at worst a 404 envelope).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn from_path(path: &str) -> Self {
        let raw = path.rsplit('/').next().unwrap_or_default();
        let bytes = urlencoding::decode_binary(raw.as_bytes());
        Self(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identifier
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_path(parts.uri.path()))
    }
}

/// Success envelope: `{success: true, <echo field>: requested, data}`
#[derive(Debug, Clone)]
pub struct LookupHit {
    pub kind: CatalogKind,
    pub requested: String,
    pub data: Value,
}

impl Serialize for LookupHit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("success", &true)?;
        map.serialize_entry(self.kind.echo_field(), &self.requested)?;
        map.serialize_entry("data", &self.data)?;
        map.end()
    }
}

/// Resolve `requested` against one catalog, logging the query and any miss
pub fn lookup(
    catalogs: &Catalogs,
    kind: CatalogKind,
    requested: String,
) -> Result<LookupHit, ApiError> {
    info!("Looking up {}: {}", kind.label(), requested);

    match catalogs.get(kind).lookup(&requested) {
        Ok(data) => Ok(LookupHit {
            kind,
            data: data.clone(),
            requested,
        }),
        Err(e) => {
            warn!("{}", e);
            Err(e)
        }
    }
}

/// GET /api/policies/:category
pub async fn get_policy(
    State(state): State<AppState>,
    Identifier(category): Identifier,
) -> Result<Json<LookupHit>, ApiError> {
    lookup(&state.catalogs, CatalogKind::Policies, category).map(Json)
}

/// GET /api/procedures/:name
pub async fn get_procedure(
    State(state): State<AppState>,
    Identifier(name): Identifier,
) -> Result<Json<LookupHit>, ApiError> {
    lookup(&state.catalogs, CatalogKind::Procedures, name).map(Json)
}

/// GET /api/contacts/:department
pub async fn get_contact(
    State(state): State<AppState>,
    Identifier(department): Identifier,
) -> Result<Json<LookupHit>, ApiError> {
    lookup(&state.catalogs, CatalogKind::Contacts, department).map(Json)
}
