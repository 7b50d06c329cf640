//! Mock implementation of ProfileStore for testing

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::entities::profile::Profile;
use crate::errors::ProfileError;

use super::r#trait::ProfileStore;

/// A scripted lookup outcome, optionally delayed
pub struct LookupResponse {
    /// Sleep this long before answering
    pub delay: Option<Duration>,
    /// The answer
    pub result: Result<Option<Profile>, ProfileError>,
}

impl LookupResponse {
    /// A delayed successful lookup
    pub fn delayed(delay: Duration, profile: Option<Profile>) -> Self {
        Self {
            delay: Some(delay),
            result: Ok(profile),
        }
    }

    /// An immediate successful lookup
    pub fn immediate(profile: Option<Profile>) -> Self {
        Self {
            delay: None,
            result: Ok(profile),
        }
    }
}

/// Mock profile store with scripted responses and failure injection
///
/// Scripted responses are consumed in order; once the queue is empty the
/// store falls back to the configured default profile.
pub struct MockProfileStore {
    profile: Mutex<Option<Profile>>,
    fail_lookup: AtomicBool,
    responses: Mutex<VecDeque<LookupResponse>>,
    lookup_calls: AtomicU32,
}

impl MockProfileStore {
    /// Create a store that answers "no profile"
    pub fn new() -> Self {
        Self {
            profile: Mutex::new(None),
            fail_lookup: AtomicBool::new(false),
            responses: Mutex::new(VecDeque::new()),
            lookup_calls: AtomicU32::new(0),
        }
    }

    /// Create a store that answers with the given profile
    pub fn with_profile(profile: Profile) -> Self {
        let store = Self::new();
        *store.profile.lock().unwrap() = Some(profile);
        store
    }

    /// Replace the default profile
    pub fn set_profile(&self, profile: Option<Profile>) {
        *self.profile.lock().unwrap() = profile;
    }

    /// Make unscripted lookups fail
    pub fn set_fail_lookup(&self, fail: bool) {
        self.fail_lookup.store(fail, Ordering::SeqCst);
    }

    /// Queue a scripted response
    pub fn push_response(&self, response: LookupResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// How many lookups were issued
    pub fn lookup_calls(&self) -> u32 {
        self.lookup_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn get_current_profile(&self) -> Result<Option<Profile>, ProfileError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);

        // Lock scope ends before any sleep
        let scripted = self.responses.lock().unwrap().pop_front();
        if let Some(response) = scripted {
            if let Some(delay) = response.delay {
                tokio::time::sleep(delay).await;
            }
            return response.result;
        }

        if self.fail_lookup.load(Ordering::SeqCst) {
            return Err(ProfileError::LookupFailed {
                message: "mock lookup failure".to_string(),
            });
        }

        Ok(self.profile.lock().unwrap().clone())
    }
}
