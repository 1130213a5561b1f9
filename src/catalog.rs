//! Catalog loading and key lookup
//!
//! A catalog is an immutable map from normalized key to an opaque JSON record,
//! loaded once from a file in the data directory. Load failures never stop the
//! service: the catalog is left empty and every lookup against it misses.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, error, info};

use crate::error::{ApiError, LoadError};

/// Turn a caller-supplied identifier into a catalog key.
///
/// Lowercases, then replaces every space with `_`. Accents and punctuation
/// are kept as-is, so "Teletrabajo!" will not match "teletrabajo".
pub fn normalize_key(input: &str) -> String {
    input.to_lowercase().replace(' ', "_")
}

/// The three catalogs served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Policies,
    Procedures,
    Contacts,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Policies,
        CatalogKind::Procedures,
        CatalogKind::Contacts,
    ];

    /// Data file backing this catalog
    pub fn file_name(self) -> &'static str {
        match self {
            CatalogKind::Policies => "policies.json",
            CatalogKind::Procedures => "procedures.json",
            CatalogKind::Contacts => "contacts.json",
        }
    }

    /// Key used for this catalog in the service metadata
    pub fn name(self) -> &'static str {
        match self {
            CatalogKind::Policies => "policies",
            CatalogKind::Procedures => "procedures",
            CatalogKind::Contacts => "contacts",
        }
    }

    /// Singular noun used in logs
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Policies => "policy",
            CatalogKind::Procedures => "procedure",
            CatalogKind::Contacts => "contact",
        }
    }

    /// Field that echoes the caller's identifier on a hit
    pub fn echo_field(self) -> &'static str {
        match self {
            CatalogKind::Policies => "category",
            CatalogKind::Procedures => "procedure",
            CatalogKind::Contacts => "department",
        }
    }

    /// Field that lists the valid keys on a miss
    pub fn available_field(self) -> &'static str {
        match self {
            CatalogKind::Policies => "available_categories",
            CatalogKind::Procedures => "available_procedures",
            CatalogKind::Contacts => "available_departments",
        }
    }

    /// Client-facing miss message
    pub fn not_found_message(self, requested: &str) -> String {
        match self {
            CatalogKind::Policies => format!("Política '{}' no encontrada", requested),
            CatalogKind::Procedures => format!("Procedimiento '{}' no encontrado", requested),
            CatalogKind::Contacts => format!("Departamento '{}' no encontrado", requested),
        }
    }
}

/// One loaded catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    /// Records keyed by normalized key, in document order
    entries: Map<String, Value>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn empty(kind: CatalogKind) -> Self {
        Self {
            kind,
            entries: Map::new(),
        }
    }

    pub fn from_entries(kind: CatalogKind, entries: Map<String, Value>) -> Self {
        Self { kind, entries }
    }

    /// Load the catalog file from `data_dir`, falling back to an empty catalog
    pub fn load(kind: CatalogKind, data_dir: &Path) -> Self {
        let path = data_dir.join(kind.file_name());
        match read_entries(&path) {
            Ok(entries) => {
                debug!("Loaded {} {} entries from {:?}", entries.len(), kind.label(), path);
                Self::from_entries(kind, entries)
            }
            Err(e) => {
                error!("{}", e);
                Self::empty(kind)
            }
        }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, in document order
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Get a record by caller-supplied identifier
    pub fn get(&self, requested: &str) -> Option<&Value> {
        self.entries.get(&normalize_key(requested))
    }

    /// Resolve an identifier, or build the not-found error listing every key
    pub fn lookup(&self, requested: &str) -> Result<&Value, ApiError> {
        self.get(requested).ok_or_else(|| ApiError::NotFound {
            kind: self.kind,
            requested: requested.to_string(),
            available: self.keys(),
        })
    }
}

/// Read and parse one data file into a JSON object map
fn read_entries(path: &Path) -> Result<Map<String, Value>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(entries) => Ok(entries),
        _ => Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Immutable snapshot of all catalogs, built once at startup
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub policies: Catalog,
    pub procedures: Catalog,
    pub contacts: Catalog,
}

impl Catalogs {
    pub fn new(policies: Catalog, procedures: Catalog, contacts: Catalog) -> Self {
        Self {
            policies,
            procedures,
            contacts,
        }
    }

    /// Load every catalog from `data_dir`
    pub fn load(data_dir: &Path) -> Self {
        info!("Loading corporate data from {:?}", data_dir);

        let catalogs = Self::new(
            Catalog::load(CatalogKind::Policies, data_dir),
            Catalog::load(CatalogKind::Procedures, data_dir),
            Catalog::load(CatalogKind::Contacts, data_dir),
        );

        for kind in CatalogKind::ALL {
            info!("{} {} entries loaded", catalogs.get(kind).len(), kind.name());
        }

        catalogs
    }

    pub fn get(&self, kind: CatalogKind) -> &Catalog {
        match kind {
            CatalogKind::Policies => &self.policies,
            CatalogKind::Procedures => &self.procedures,
            CatalogKind::Contacts => &self.contacts,
        }
    }
}
