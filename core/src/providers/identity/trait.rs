//! Identity provider trait defining the contract with the hosted identity
//! service.
//!
//! The provider owns sessions exclusively: it issues them on sign-in,
//! rotates them on token refresh, and destroys them on sign-out or expiry.
//! The coordinator only ever holds a read-only cached copy.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::entities::session::Session;
use crate::domain::events::AuthChange;
use crate::errors::IdentityError;

/// Contract for the hosted identity service
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Probe for the current session
    ///
    /// # Returns
    /// * `Ok(Some(Session))` - a live session exists
    /// * `Ok(None)` - no session
    /// * `Err(IdentityError)` - the probe itself failed
    async fn get_session(&self) -> Result<Option<Session>, IdentityError>;

    /// Sign in with email and password
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    /// Sign out, destroying the current session
    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Re-send the verification email for an unconfirmed account
    async fn resend_verification(&self, email: &str) -> Result<(), IdentityError>;

    /// Subscribe to auth-state change notifications
    ///
    /// Each call returns a fresh subscription. Events are delivered
    /// serially; dropping the receiver ends the subscription.
    fn auth_events(&self) -> mpsc::UnboundedReceiver<AuthChange>;
}
