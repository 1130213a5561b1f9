//! Corporate Information API
//!
//! Read-only lookup service over three static JSON dictionaries:
//! internal policies, administrative procedures and the department
//! contact directory.
//!
//! ## Architecture
//!
//! ```text
//! startup
//!   │
//!   ├─► ServerConfig::from_env()      (host, port, data dir)
//!   │
//!   ├─► Catalogs::load(data_dir)      (policies.json, procedures.json, contacts.json)
//!   │       └─► missing / malformed file → empty catalog, logged
//!   │
//!   └─► build_router(AppState)        (immutable snapshot shared by all handlers)
//!
//! request
//!   GET /api/procedures/Solicitar Vacaciones
//!         │
//!         ▼
//!   normalize_key() → "solicitar_vacaciones"
//!         │
//!         ├─► hit  → 200 {success: true, procedure, data}
//!         └─► miss → 404 {success: false, message, available_procedures}
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;

pub use catalog::{normalize_key, Catalog, CatalogKind, Catalogs};
pub use config::ServerConfig;
pub use error::{ApiError, LoadError};
pub use router::{build_router, AppState};
