//! Domain-level error types.

use thiserror::Error;

/// Business-rule failures, raised before any data access happens.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Repository-level errors.
///
/// The in-memory store never raises these; the variants exist so callers
/// already handle rejection when a network-backed implementation lands.
/// A missing entity is not an error; it comes back as `Ok(None)`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Backend connection failed: {0}")]
    Connection(String),

    #[error("Backend query failed: {0}")]
    Query(String),
}
