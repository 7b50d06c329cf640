//! Domain events delivered by the identity provider's auth-change stream.

use crate::domain::entities::session::Session;

/// Auth-state change notification
///
/// Delivered serially over the provider's change stream. `SignedIn`
/// re-enters the profile lookup; `SignedOut` evicts the user
/// unconditionally; `TokenRefreshed` swaps the cached credential without
/// touching routing.
#[derive(Debug, Clone)]
pub enum AuthChange {
    /// A session was established (sign-in or initial restore)
    SignedIn(Session),
    /// The session ended (sign-out or expiry)
    SignedOut,
    /// The session's access token was rotated
    TokenRefreshed(Session),
}
