//! Deterministic profile identifiers.

use uuid::Uuid;

use crate::error::{Result, ScrapeError};

/// Namespace used by the demonstration run.
pub const DEFAULT_UID_NAMESPACE: &str = "4f8cc129-fc8e-47fd-ba7a-79638a875d2f";

/// Parse a namespace string into a UUID.
pub fn parse_namespace(namespace: &str) -> Result<Uuid> {
    Uuid::parse_str(namespace.trim()).map_err(|source| ScrapeError::InvalidNamespace {
        namespace: namespace.to_string(),
        source,
    })
}

/// Name-based (v5) UUID of `username` under `namespace`.
pub fn profile_uid(username: &str, namespace: &Uuid) -> Uuid {
    Uuid::new_v5(namespace, username.as_bytes())
}
