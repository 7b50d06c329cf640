//! Canonical route classification table
//!
//! One table replaces the divergent per-page route lists of the legacy
//! console. Paths are compared after normalization (see
//! [`crate::utils::path`]).

use serde::{Deserialize, Serialize};

/// Canonical route table used for route classification and redirect targets
///
/// The root path is classified Neutral, not Public: authenticated users
/// landing on it are forwarded to their role's home area, while
/// unauthenticated users stay because the fallback target is the root
/// itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoutingConfig {
    /// Publicly reachable paths (exact match after normalization)
    #[serde(default = "default_public_routes")]
    pub public_routes: Vec<String>,

    /// Any path containing this fragment is Public (identity-provider
    /// callback routes)
    #[serde(default = "default_auth_fragment")]
    pub auth_callback_fragment: String,

    /// Prefix for the admin console area
    #[serde(default = "default_admin_prefix")]
    pub admin_prefix: String,

    /// Prefix for the salesperson app area
    #[serde(default = "default_app_prefix")]
    pub app_prefix: String,

    /// Root / landing path
    #[serde(default = "default_root_path")]
    pub root_path: String,

    /// Home path for owner and manager roles
    #[serde(default = "default_admin_home")]
    pub admin_home: String,

    /// Home path for the salesperson role
    #[serde(default = "default_app_home")]
    pub app_home: String,

    /// Onboarding path for identities without a profile
    #[serde(default = "default_setup_path")]
    pub setup_path: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            public_routes: default_public_routes(),
            auth_callback_fragment: default_auth_fragment(),
            admin_prefix: default_admin_prefix(),
            app_prefix: default_app_prefix(),
            root_path: default_root_path(),
            admin_home: default_admin_home(),
            app_home: default_app_home(),
            setup_path: default_setup_path(),
        }
    }
}

impl RoutingConfig {
    /// Replace the public route list
    pub fn with_public_routes(mut self, routes: Vec<String>) -> Self {
        self.public_routes = routes;
        self
    }

    /// Add a single public route
    pub fn with_public_route(mut self, route: impl Into<String>) -> Self {
        self.public_routes.push(route.into());
        self
    }

    /// Set the admin home path
    pub fn with_admin_home(mut self, path: impl Into<String>) -> Self {
        self.admin_home = path.into();
        self
    }

    /// Set the app home path
    pub fn with_app_home(mut self, path: impl Into<String>) -> Self {
        self.app_home = path.into();
        self
    }
}

fn default_public_routes() -> Vec<String> {
    [
        "/login",
        "/signup",
        "/confirm-email",
        "/setup-complete",
        "/forgot-password",
        "/reset-password",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_auth_fragment() -> String {
    String::from("/auth/")
}

fn default_admin_prefix() -> String {
    String::from("/admin")
}

fn default_app_prefix() -> String {
    String::from("/app")
}

fn default_root_path() -> String {
    String::from("/")
}

fn default_admin_home() -> String {
    String::from("/admin/dashboard")
}

fn default_app_home() -> String {
    String::from("/app/leads")
}

fn default_setup_path() -> String {
    String::from("/setup-complete")
}
