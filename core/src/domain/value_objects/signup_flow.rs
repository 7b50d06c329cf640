//! Typed signup-flow metadata.
//!
//! The identity provider carries signup context as free-form user metadata.
//! Instead of trusting that payload wherever it is read back, it is modeled
//! as a tagged union keyed by an explicit `signup_flow` discriminant with a
//! fixed field set per variant, validated once at the boundary.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Signup flow the identity came through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signup_flow", rename_all = "lowercase")]
pub enum SignupFlow {
    /// Dealership-owner signup: creates a new dealership during setup
    Dealership {
        /// Name of the dealership being created
        dealership_name: String,
        /// Display name of the signing-up owner
        full_name: String,
    },
    /// Salesperson signup: joins an existing dealership by invite
    Sales {
        /// Invite code issued by the dealership
        invite_code: String,
        /// Display name of the signing-up salesperson
        full_name: String,
    },
}

impl SignupFlow {
    /// Parse signup-flow metadata from a raw provider payload
    ///
    /// * `Ok(None)` - the payload carries no `signup_flow` discriminant
    /// * `Ok(Some(flow))` - a valid, fully-populated variant
    /// * `Err(DomainError::Validation)` - unknown discriminant or missing
    ///   fields
    pub fn from_metadata(value: &serde_json::Value) -> Result<Option<Self>, DomainError> {
        if value.get("signup_flow").is_none() {
            return Ok(None);
        }

        serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| DomainError::Validation {
                message: format!("invalid signup metadata: {}", e),
            })
    }
}
