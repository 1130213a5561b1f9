//! Error types for the corporate API
//!
//! Two failure kinds exist: data-source failures while loading catalogs at
//! startup (always recovered by the loader) and lookup misses at request time
//! (surfaced to the client as a structured 404).

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::catalog::CatalogKind;

/// Failure to turn a data file into a catalog
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Data file not found: {path:?}")]
    Missing { path: PathBuf },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Top-level value in {path:?} is not a JSON object")]
    NotAnObject { path: PathBuf },
}

/// Request-time failures
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{} '{requested}' not found", .kind.label())]
    NotFound {
        kind: CatalogKind,
        /// Identifier as the caller sent it (not normalized)
        requested: String,
        /// Every key of the catalog, in document order
        available: Vec<String>,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

/// Body of a miss: `{success: false, message, available_<kind>: [...]}`
impl Serialize for ApiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ApiError::NotFound {
                kind,
                requested,
                available,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("message", &kind.not_found_message(requested))?;
                map.serialize_entry(kind.available_field(), available)?;
                map.end()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_body_shape() {
        let err = ApiError::NotFound {
            kind: CatalogKind::Contacts,
            requested: "Legal".to_string(),
            available: vec!["rrhh".to_string(), "ti".to_string()],
        };

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({
                "success": false,
                "message": "Departamento 'Legal' no encontrado",
                "available_departments": ["rrhh", "ti"],
            })
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = ApiError::NotFound {
            kind: CatalogKind::Policies,
            requested: "teletrabajo".to_string(),
            available: vec![],
        };
        assert_eq!(err.to_string(), "policy 'teletrabajo' not found");
    }
}
