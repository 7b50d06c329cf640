//! Session/role coordinator implementation

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::domain::entities::profile::Profile;
use crate::domain::entities::session::Session;
use crate::domain::events::AuthChange;
use crate::domain::value_objects::auth_snapshot::AuthSnapshot;
use crate::errors::{DomainError, DomainResult, IdentityError, ProfileError};
use crate::providers::{IdentityProvider, ProfileStore, Router};

use super::config::CoordinatorConfig;
use super::policy::{decide, RouteDecision};
use super::state::{AuthState, CoordinatorState, Phase};

/// Scoped auth-change subscription
///
/// Dropping the subscription aborts the forwarding task, so no event can
/// reach a torn-down coordinator.
pub struct AuthSubscription {
    handle: JoinHandle<()>,
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Coordinator keeping `(session, profile)` in sync with the identity
/// provider and the current path compatible with the caller's role
///
/// All transitions are driven by one-shot awaited lookups and the serial
/// auth-change stream. Overlapping lookups from rapid re-entry are guarded
/// by a monotonic generation counter: a settle applies only while its
/// generation is still current, so a stale slow lookup can never overwrite
/// a newer state. The state lock is never held across an await point.
pub struct SessionRoleCoordinator<I, P, R>
where
    I: IdentityProvider,
    P: ProfileStore,
    R: Router,
{
    /// Identity provider owning the session
    identity: Arc<I>,
    /// Profile lookup service
    profiles: Arc<P>,
    /// Navigation layer
    router: Arc<R>,
    /// Route table and probe timeout
    config: CoordinatorConfig,
    /// Cached `(session, profile, phase)` view
    state: Mutex<CoordinatorState>,
    /// Monotonic generation counter guarding overlapping lookups
    generation: AtomicU64,
    /// Publisher for the observable snapshot
    snapshot_tx: watch::Sender<AuthSnapshot>,
}

impl<I, P, R> SessionRoleCoordinator<I, P, R>
where
    I: IdentityProvider + 'static,
    P: ProfileStore + 'static,
    R: Router + 'static,
{
    /// Create a new coordinator
    ///
    /// The coordinator starts in `Init` with a loading snapshot; call
    /// [`start`](Self::start) to issue the initial session probe.
    pub fn new(identity: Arc<I>, profiles: Arc<P>, router: Arc<R>, config: CoordinatorConfig) -> Self {
        let (snapshot_tx, _) = watch::channel(AuthSnapshot::loading());
        Self {
            identity,
            profiles,
            router,
            config,
            state: Mutex::new(CoordinatorState::new()),
            generation: AtomicU64::new(0),
            snapshot_tx,
        }
    }

    /// Subscribe to the observable `(user, profile, loading)` tuple
    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// The identity provider this coordinator consumes
    ///
    /// Login and signup pages reach through here for `sign_in` and
    /// `resend_verification`; the coordinator reacts to the resulting
    /// auth-change events.
    pub fn identity(&self) -> &Arc<I> {
        &self.identity
    }

    /// The profile lookup service this coordinator consumes
    pub fn profiles(&self) -> &Arc<P> {
        &self.profiles
    }

    /// The navigation layer this coordinator consumes
    pub fn router(&self) -> &Arc<R> {
        &self.router
    }

    /// Current observable snapshot
    pub fn snapshot(&self) -> AuthSnapshot {
        self.state.lock().unwrap().snapshot()
    }

    /// Issue the initial session probe
    ///
    /// The probe is bounded by the configured timeout; on expiry the
    /// coordinator settles Unauthenticated-equivalent so the UI never shows
    /// an indefinite loading screen. A failed probe settles `Failed` and is
    /// not retried automatically; the next `start` re-probes.
    pub async fn start(&self) {
        let generation = self.next_generation();
        self.apply(generation, |s| {
            s.state = AuthState::Probing;
            s.session = None;
            s.profile = None;
            s.phase = Phase::Loading;
        });

        let probe = tokio::time::timeout(self.config.probe.timeout(), self.identity.get_session());

        match probe.await {
            Err(_) => {
                let timeout = IdentityError::ProbeTimeout {
                    timeout_ms: self.config.probe.timeout_ms,
                };
                warn!(error = %timeout, "settling unauthenticated");
                self.settle(generation, AuthState::Unauthenticated, None, None);
            }
            Ok(Err(e)) => {
                error!(error = %e, "session probe failed");
                self.settle(generation, AuthState::Failed, None, None);
            }
            Ok(Ok(None)) => {
                self.settle(generation, AuthState::Unauthenticated, None, None);
            }
            Ok(Ok(Some(session))) => {
                self.resolve_profile(generation, session).await;
            }
        }
    }

    /// React to an auth-change notification from the identity provider
    pub async fn handle_event(&self, event: AuthChange) {
        match event {
            AuthChange::SignedIn(session) => {
                let generation = self.next_generation();
                let cached = session.clone();
                self.apply(generation, move |s| {
                    s.state = AuthState::Probing;
                    s.session = Some(cached);
                    s.profile = None;
                    s.phase = Phase::Loading;
                });
                self.resolve_profile(generation, session).await;
            }
            AuthChange::SignedOut => {
                let generation = self.next_generation();
                self.apply(generation, |s| {
                    s.state = AuthState::Unauthenticated;
                    s.session = None;
                    s.profile = None;
                    s.phase = Phase::Ready;
                });
                // The one navigation not guarded by route classification:
                // signing out must always evict the user from protected
                // content.
                self.router.push(&self.config.routing.root_path);
            }
            AuthChange::TokenRefreshed(session) => {
                // Credential rotation only: no re-settle, no navigation
                let generation = self.generation.load(Ordering::SeqCst);
                self.apply(generation, move |s| {
                    if s.session.is_some() {
                        s.session = Some(session);
                    }
                });
            }
        }
    }

    /// Spawn a task forwarding the provider's auth-change stream
    ///
    /// Takes a clone of the owning `Arc`; the returned guard aborts the
    /// task on drop.
    pub fn spawn_listener(self: Arc<Self>) -> AuthSubscription {
        let mut events = self.identity.auth_events();
        let handle = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                self.handle_event(event).await;
            }
        });
        AuthSubscription { handle }
    }

    /// Sign out and evict the user to the root path
    ///
    /// Local cached state is cleared before the provider call so no page
    /// can render protected content while sign-out is in flight. A failed
    /// provider call is retried once; a second failure is returned to the
    /// caller for surfacing. Navigation to root happens regardless.
    pub async fn sign_out(&self) -> DomainResult<()> {
        let generation = self.next_generation();
        self.apply(generation, |s| {
            s.state = AuthState::Unauthenticated;
            s.session = None;
            s.profile = None;
            s.phase = Phase::Ready;
        });

        let result = match self.identity.sign_out().await {
            Ok(()) => Ok(()),
            Err(first) => {
                debug!(error = %first, "sign-out failed, retrying once");
                match self.identity.sign_out().await {
                    Ok(()) => Ok(()),
                    Err(second) => {
                        warn!(error = %second, "sign-out failed after retry");
                        Err(DomainError::Identity(second))
                    }
                }
            }
        };

        self.router.push(&self.config.routing.root_path);
        result
    }

    /// Re-run the profile lookup and update the cached profile
    ///
    /// `phase` is untouched and the routing policy does not re-run. Unlike
    /// a settle, a failed lookup here is returned to the caller and the
    /// cached profile is left as it was.
    pub async fn refresh_profile(&self) -> DomainResult<()> {
        if self.state.lock().unwrap().session.is_none() {
            return Err(DomainError::Validation {
                message: "refresh_profile requires an active session".to_string(),
            });
        }

        let generation = self.next_generation();
        let lookup =
            tokio::time::timeout(self.config.probe.timeout(), self.profiles.get_current_profile());

        let result = match lookup.await {
            Err(_) => Err(ProfileError::LookupTimeout),
            Ok(r) => r,
        };

        match result {
            Ok(profile) => {
                self.apply(generation, move |s| {
                    s.state = match &profile {
                        Some(p) => AuthState::Active(p.role),
                        None => AuthState::AwaitingSetup,
                    };
                    s.profile = profile;
                });
                Ok(())
            }
            Err(e) => Err(DomainError::Profile(e)),
        }
    }

    /// Look up the profile for a fresh session and settle
    ///
    /// Lookup failures and timeouts settle toward "needs setup", never
    /// toward an assumed role.
    async fn resolve_profile(&self, generation: u64, session: Session) {
        let lookup =
            tokio::time::timeout(self.config.probe.timeout(), self.profiles.get_current_profile());

        let result = match lookup.await {
            Err(_) => Err(ProfileError::LookupTimeout),
            Ok(r) => r,
        };

        match result {
            Ok(Some(profile)) => {
                let role = profile.role;
                self.settle(generation, AuthState::Active(role), Some(session), Some(profile));
            }
            Ok(None) => {
                self.settle(generation, AuthState::AwaitingSetup, Some(session), None);
            }
            Err(e) => {
                warn!(error = %e, "profile lookup failed, routing to setup");
                self.settle(generation, AuthState::AwaitingSetup, Some(session), None);
            }
        }
    }

    /// Settle into a definite state and run the routing policy exactly once
    fn settle(
        &self,
        generation: u64,
        state: AuthState,
        session: Option<Session>,
        profile: Option<Profile>,
    ) {
        let applied = self.apply(generation, move |s| {
            s.state = state;
            s.session = session;
            s.profile = profile;
            s.phase = Phase::Ready;
        });

        if applied {
            self.run_policy(&state);
        }
    }

    /// Apply a state mutation if `generation` is still current, publishing
    /// the new snapshot
    ///
    /// Returns false when a newer operation has superseded this one; the
    /// stale result is discarded.
    fn apply<F>(&self, generation: u64, mutate: F) -> bool
    where
        F: FnOnce(&mut CoordinatorState),
    {
        let mut state = self.state.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded state transition");
            return false;
        }
        mutate(&mut state);
        self.snapshot_tx.send_replace(state.snapshot());
        true
    }

    /// Evaluate the routing policy once and issue at most one navigation
    fn run_policy(&self, state: &AuthState) {
        let current = self.router.current_path();
        match decide(state, &current, &self.config.routing) {
            RouteDecision::Stay => {}
            RouteDecision::Navigate(target) => {
                debug!(from = %current, to = %target, "routing policy navigation");
                self.router.push(&target);
            }
        }
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}
