//! Domain Layer - Core Entity Trait and Errors
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

use serde::Serialize;
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DomainError {
    /// Index is not a valid position in the current list
    #[error("Index {index} out of range (list has {len} entries)")]
    OutOfRange { index: usize, len: usize },

    #[error("Unknown store: {0}")]
    UnknownStore(String),

    /// Quantity input that is negative, too large, or not a number
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Save or edit attempted with no open quantity editor
    #[error("No entry is being edited")]
    EditorClosed,

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Configuration or catalog file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Self::InvalidCatalog(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DomainError::OutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "Index 5 out of range (list has 3 entries)");
        assert_eq!(
            DomainError::UnknownStore("Sklep Z".to_string()).to_string(),
            "Unknown store: Sklep Z"
        );
    }

    #[test]
    fn test_io_error_maps_to_config() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        assert!(matches!(DomainError::from(io), DomainError::Config(_)));
    }
}
