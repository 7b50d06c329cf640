//! Session entity representing an authenticated identity's credential state.
//!
//! Sessions are owned by the identity provider; the coordinator holds a
//! read-only cached copy that is created on sign-in, replaced on token
//! refresh, and destroyed on sign-out or expiry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::signup_flow::SignupFlow;
use crate::errors::DomainError;

/// The identity behind a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Stable identifier issued by the identity provider
    pub id: Uuid,

    /// Email address the identity signed up with
    pub email: String,

    /// Raw user metadata as stored by the identity provider
    ///
    /// Only read through [`SessionUser::signup_flow`], which validates the
    /// payload at the boundary instead of trusting untyped metadata.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl SessionUser {
    /// Parse and validate the signup-flow metadata carried by this identity
    ///
    /// Returns `Ok(None)` when the identity carries no signup-flow
    /// discriminant at all (e.g. an account created before the flow
    /// existed).
    pub fn signup_flow(&self) -> Result<Option<SignupFlow>, DomainError> {
        SignupFlow::from_metadata(&self.metadata)
    }
}

/// An authenticated identity's short-lived credential state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque access token issued by the identity provider
    pub access_token: String,

    /// The identity this session belongs to
    pub user: SessionUser,

    /// When the access token expires, if the provider reports it
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a new session
    pub fn new(access_token: String, user: SessionUser) -> Self {
        Self {
            access_token,
            user,
            expires_at: None,
        }
    }

    /// Set the token expiry
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Whether the access token has expired
    ///
    /// Sessions without a reported expiry are treated as live; expiry is
    /// ultimately enforced by the identity provider.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => at <= Utc::now(),
            None => false,
        }
    }

    /// Replace the credential after a token refresh
    ///
    /// The identity is unchanged; only the token and expiry rotate.
    pub fn refresh(&mut self, access_token: String, expires_at: Option<DateTime<Utc>>) {
        self.access_token = access_token;
        self.expires_at = expires_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn test_user() -> SessionUser {
        SessionUser {
            id: Uuid::new_v4(),
            email: "owner@lakeside-motors.test".to_string(),
            metadata: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_session_without_expiry_is_live() {
        let session = Session::new("token-1".to_string(), test_user());
        assert!(!session.is_expired());
    }

    #[test]
    fn test_session_expiry() {
        let live = Session::new("token-1".to_string(), test_user())
            .with_expiry(Utc::now() + Duration::hours(1));
        assert!(!live.is_expired());

        let expired = Session::new("token-2".to_string(), test_user())
            .with_expiry(Utc::now() - Duration::seconds(1));
        assert!(expired.is_expired());
    }

    #[test]
    fn test_refresh_replaces_token_only() {
        let user = test_user();
        let user_id = user.id;
        let mut session = Session::new("token-1".to_string(), user)
            .with_expiry(Utc::now() - Duration::seconds(1));

        session.refresh(
            "token-2".to_string(),
            Some(Utc::now() + Duration::hours(1)),
        );

        assert_eq!(session.access_token, "token-2");
        assert_eq!(session.user.id, user_id);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_signup_flow_accessor() {
        let mut user = test_user();
        assert!(user.signup_flow().unwrap().is_none());

        user.metadata = json!({
            "signup_flow": "dealership",
            "dealership_name": "Lakeside Motors",
            "full_name": "Jordan Avery",
        });
        let flow = user.signup_flow().unwrap();
        assert!(matches!(flow, Some(SignupFlow::Dealership { .. })));
    }
}
