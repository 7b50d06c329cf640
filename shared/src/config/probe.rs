//! Session probe configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the initial session probe
///
/// The probe is bounded by a single timeout so the console never shows an
/// indefinite loading screen: once the bound elapses, the coordinator
/// settles with whatever state is available.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Session probe timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ProbeConfig {
    /// Create a probe configuration with an explicit timeout
    pub fn new(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }

    /// Set the probe timeout in milliseconds
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Probe timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Create from environment variables
    ///
    /// Reads `SESSION_PROBE_TIMEOUT_MS`, falling back to the default when
    /// the variable is unset or unparseable.
    pub fn from_env() -> Self {
        let timeout_ms = std::env::var("SESSION_PROBE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_ms);

        Self { timeout_ms }
    }
}

fn default_timeout_ms() -> u64 {
    3000
}
