//! The observable `(user, profile, loading)` tuple consumed by every page.

use serde::{Deserialize, Serialize};

use crate::domain::entities::profile::Profile;
use crate::domain::entities::session::SessionUser;

/// Point-in-time view of the coordinator state, published over a watch
/// channel so consuming pages re-render on change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    /// The authenticated identity, if any
    pub user: Option<SessionUser>,

    /// The identity's dealership profile, if any
    pub profile: Option<Profile>,

    /// Whether a session probe or profile lookup is in flight
    pub loading: bool,
}

impl AuthSnapshot {
    /// Snapshot shown before the first probe completes
    pub fn loading() -> Self {
        Self {
            user: None,
            profile: None,
            loading: true,
        }
    }

    /// Whether a session is present
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}
