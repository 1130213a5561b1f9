//! Server configuration
//!
//! Reads config from env vars (a `.env` file is honoured):
//!   CORPORATE_API_HOST     - listen host (default: 0.0.0.0)
//!   CORPORATE_API_PORT     - listen port (default: 8002)
//!   CORPORATE_API_DATA_DIR - directory holding the catalog files
//!                            (default: `data/` next to the crate manifest)

use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8002;

/// Service name reported by `/health`
pub const SERVICE_ID: &str = "corporate-api";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: default_data_dir(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("CORPORATE_API_HOST").unwrap_or(defaults.host);

        let port = match lookup("CORPORATE_API_PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!(
                    "Invalid CORPORATE_API_PORT '{}', using {}",
                    raw, DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let data_dir = lookup("CORPORATE_API_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        Self {
            host,
            port,
            data_dir,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `data/` under the crate root, where the catalog files ship
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
