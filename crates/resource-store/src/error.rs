//! # Store Errors
//!
//! The error type shared by every store. Keeping it in one place means a menu, a
//! floor plan and an order registry all fail the same way for the same reason.

/// Errors that can occur when reading from or writing to a store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No entry is stored under the requested id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An entry with the same id is already stored.
    #[error("{entity} already exists: {id}")]
    DuplicateKey { entity: &'static str, id: String },
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub(crate) fn duplicate(entity: &'static str, id: impl std::fmt::Display) -> Self {
        StoreError::DuplicateKey {
            entity,
            id: id.to_string(),
        }
    }
}
