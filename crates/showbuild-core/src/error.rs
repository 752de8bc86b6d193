//! Error types for the rundown engine.

use thiserror::Error;

use crate::validation::RuleViolation;

/// Errors surfaced by engine operations.
///
/// Parse failures of stored data and transport failures on best-effort
/// writes are recovered inside the engine and never reach this type.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A validation rule rejected the input; the operation was not performed.
    #[error("{0}")]
    Validation(#[from] RuleViolation),

    /// A remote collaborator could not be reached or rejected the request.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The operation requires a valid session.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Local store failure.
    #[error("persistence error: {0}")]
    Persistence(#[from] showbuild_persistence::PersistenceError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Shorthand for a validation failure with a custom message.
    pub fn invalid(message: impl Into<String>) -> Self {
        CoreError::Validation(RuleViolation::new(message))
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, CoreError>;
