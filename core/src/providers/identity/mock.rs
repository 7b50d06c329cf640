//! Mock implementation of IdentityProvider for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::domain::entities::session::Session;
use crate::domain::events::AuthChange;
use crate::errors::IdentityError;

use super::r#trait::IdentityProvider;

/// Mock identity provider with failure and delay injection
pub struct MockIdentityProvider {
    session: Arc<Mutex<Option<Session>>>,
    probe_delay: Mutex<Option<Duration>>,
    fail_probe: AtomicBool,
    unconfirmed: AtomicBool,
    /// Number of upcoming sign-out calls that should fail
    sign_out_failures: AtomicU32,
    sign_out_calls: AtomicU32,
    resend_calls: AtomicU32,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<AuthChange>>>,
}

impl MockIdentityProvider {
    /// Create a provider with no session
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(None)),
            probe_delay: Mutex::new(None),
            fail_probe: AtomicBool::new(false),
            unconfirmed: AtomicBool::new(false),
            sign_out_failures: AtomicU32::new(0),
            sign_out_calls: AtomicU32::new(0),
            resend_calls: AtomicU32::new(0),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider that already holds a session
    pub fn with_session(session: Session) -> Self {
        let provider = Self::new();
        *provider.session.lock().unwrap() = Some(session);
        provider
    }

    /// Replace the stored session
    pub fn set_session(&self, session: Option<Session>) {
        *self.session.lock().unwrap() = session;
    }

    /// Delay every probe by `delay` (for timeout tests)
    pub fn set_probe_delay(&self, delay: Duration) {
        *self.probe_delay.lock().unwrap() = Some(delay);
    }

    /// Make every probe fail
    pub fn set_fail_probe(&self, fail: bool) {
        self.fail_probe.store(fail, Ordering::SeqCst);
    }

    /// Treat the account as not yet email-confirmed
    pub fn set_unconfirmed(&self, unconfirmed: bool) {
        self.unconfirmed.store(unconfirmed, Ordering::SeqCst);
    }

    /// Make the next `count` sign-out calls fail
    pub fn fail_next_sign_outs(&self, count: u32) {
        self.sign_out_failures.store(count, Ordering::SeqCst);
    }

    /// How many times `sign_out` was invoked
    pub fn sign_out_calls(&self) -> u32 {
        self.sign_out_calls.load(Ordering::SeqCst)
    }

    /// How many times `resend_verification` was invoked
    pub fn resend_calls(&self) -> u32 {
        self.resend_calls.load(Ordering::SeqCst)
    }

    /// Push an auth-change event to every live subscriber
    pub fn emit(&self, event: AuthChange) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn get_session(&self) -> Result<Option<Session>, IdentityError> {
        let delay = *self.probe_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_probe.load(Ordering::SeqCst) {
            return Err(IdentityError::ProbeFailed {
                message: "mock probe failure".to_string(),
            });
        }

        Ok(self.session.lock().unwrap().clone())
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> Result<Session, IdentityError> {
        if self.unconfirmed.load(Ordering::SeqCst) {
            return Err(IdentityError::EmailNotConfirmed);
        }

        let session = self
            .session
            .lock()
            .unwrap()
            .clone()
            .ok_or(IdentityError::InvalidCredentials)?;

        self.emit(AuthChange::SignedIn(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);

        let remaining = self.sign_out_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.sign_out_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(IdentityError::SignOutFailed {
                message: "mock sign-out failure".to_string(),
            });
        }

        *self.session.lock().unwrap() = None;
        Ok(())
    }

    async fn resend_verification(&self, _email: &str) -> Result<(), IdentityError> {
        self.resend_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn auth_events(&self) -> mpsc::UnboundedReceiver<AuthChange> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}
