//! Error types for the restaurant core.

use resource_store::StoreError;
use thiserror::Error;

/// Errors that can occur while operating the restaurant.
///
/// Every operation fails before it mutates anything, so an error always leaves
/// the table, order or registry it was aimed at unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// A referenced table, dish or order id does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A table or dish id is already registered.
    #[error("{0}")]
    DuplicateKey(String),

    /// Malformed input (zero quantity, capacity or customer count, empty name).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The table or order is not in a state that permits the operation.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// The category of a [`RestaurantError`], for callers that only care about the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    DuplicateKey,
    InvalidArgument,
    InvalidState,
}

impl RestaurantError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RestaurantError::NotFound(_) => ErrorKind::NotFound,
            RestaurantError::DuplicateKey(_) => ErrorKind::DuplicateKey,
            RestaurantError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            RestaurantError::InvalidState(_) => ErrorKind::InvalidState,
        }
    }
}

impl From<StoreError> for RestaurantError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => RestaurantError::NotFound(err.to_string()),
            StoreError::DuplicateKey { .. } => RestaurantError::DuplicateKey(err.to_string()),
        }
    }
}

pub type Result<T, E = RestaurantError> = std::result::Result<T, E>;
