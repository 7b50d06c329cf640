//! Coordinator state: the `(session, profile, phase)` tuple and the
//! state-machine position it settles into.

use crate::domain::entities::profile::{DealershipRole, Profile};
use crate::domain::entities::session::Session;
use crate::domain::value_objects::auth_snapshot::AuthSnapshot;

/// Whether a probe or lookup is in flight
///
/// `Loading` only during the initial session probe or an in-flight profile
/// lookup; once `Ready`, every route mismatch has been resolved by a single
/// navigation or is tolerated because the current path is Public.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// Position in the coordinator state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No session probe issued yet
    Init,
    /// Session probe or profile lookup in flight
    Probing,
    /// No session
    Unauthenticated,
    /// Session exists, no profile yet: onboarding incomplete
    AwaitingSetup,
    /// Session and profile both present
    Active(DealershipRole),
    /// Probe failed unrecoverably; routes like Unauthenticated
    Failed,
}

impl AuthState {
    /// Whether the routing policy may run for this state
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated | Self::AwaitingSetup | Self::Active(_) | Self::Failed
        )
    }
}

/// The coordinator's cached view of session and profile
#[derive(Debug, Clone)]
pub struct CoordinatorState {
    /// State-machine position
    pub state: AuthState,
    /// Read-only cached session copy
    pub session: Option<Session>,
    /// The session identity's dealership profile
    pub profile: Option<Profile>,
    /// Loading flag exposed to consuming pages
    pub phase: Phase,
}

impl CoordinatorState {
    /// State before the first probe
    pub fn new() -> Self {
        Self {
            state: AuthState::Init,
            session: None,
            profile: None,
            phase: Phase::Loading,
        }
    }

    /// The observable tuple published to consuming pages
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            user: self.session.as_ref().map(|s| s.user.clone()),
            profile: self.profile.clone(),
            loading: self.phase == Phase::Loading,
        }
    }
}

impl Default for CoordinatorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CoordinatorState::new();
        assert_eq!(state.state, AuthState::Init);
        assert_eq!(state.phase, Phase::Loading);
        assert!(!state.state.is_settled());

        let snapshot = state.snapshot();
        assert!(snapshot.loading);
        assert!(snapshot.user.is_none());
        assert!(snapshot.profile.is_none());
    }

    #[test]
    fn test_settled_states() {
        assert!(AuthState::Unauthenticated.is_settled());
        assert!(AuthState::AwaitingSetup.is_settled());
        assert!(AuthState::Active(DealershipRole::Owner).is_settled());
        assert!(AuthState::Failed.is_settled());
        assert!(!AuthState::Init.is_settled());
        assert!(!AuthState::Probing.is_settled());
    }
}
