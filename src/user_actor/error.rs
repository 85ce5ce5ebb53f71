//! Error types for the User store.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// A required field was missing or empty on create.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No live record has the requested id.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The store task is gone (shut down or crashed).
    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
}
