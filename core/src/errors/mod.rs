//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{IdentityError, ProfileError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

pub type DomainResult<T> = Result<T, DomainError>;
