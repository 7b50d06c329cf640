//! Error types for the identity and profile collaborator boundaries.
//!
//! These represent failures of the external services the coordinator
//! consumes. User-facing messages are composed in the presentation layer;
//! the coordinator only logs and routes.

use thiserror::Error;

/// Identity-provider errors
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Session probe failed: {message}")]
    ProbeFailed { message: String },

    #[error("Session probe timed out after {timeout_ms}ms")]
    ProbeTimeout { timeout_ms: u64 },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email not confirmed")]
    EmailNotConfirmed,

    #[error("Sign-out failed: {message}")]
    SignOutFailed { message: String },

    #[error("Identity service unavailable: {message}")]
    ServiceUnavailable { message: String },
}

/// Profile-lookup errors
///
/// The routing policy intentionally cannot distinguish a transient lookup
/// failure from "user truly has no profile": both settle toward the setup
/// path, never toward an assumed role.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile lookup failed: {message}")]
    LookupFailed { message: String },

    #[error("Profile lookup timed out")]
    LookupTimeout,
}
