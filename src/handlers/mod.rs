//! HTTP handlers
//!
//! - `info`: service metadata, health check and the unknown-route fallback
//! - `lookup`: key lookups against the policy, procedure and contact catalogs

pub mod info;
pub mod lookup;
