//! Configuration for the session/role coordinator

use dd_shared::config::{ProbeConfig, RoutingConfig};

/// Configuration for the session/role coordinator
#[derive(Debug, Clone, Default)]
pub struct CoordinatorConfig {
    /// Canonical route table
    pub routing: RoutingConfig,
    /// Session probe timeout
    pub probe: ProbeConfig,
}

impl CoordinatorConfig {
    /// Replace the route table
    pub fn with_routing(mut self, routing: RoutingConfig) -> Self {
        self.routing = routing;
        self
    }

    /// Replace the probe configuration
    pub fn with_probe(mut self, probe: ProbeConfig) -> Self {
        self.probe = probe;
        self
    }

    /// Load configuration from environment variables, with the canonical
    /// route table defaults
    pub fn from_env() -> Self {
        Self {
            routing: RoutingConfig::default(),
            probe: ProbeConfig::from_env(),
        }
    }
}
