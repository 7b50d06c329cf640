//! Session/role coordinator module
//!
//! This module provides the client-side state machine that keeps the
//! visible page consistent with the user's authentication and role state:
//! - Initial session probe, bounded by a single timeout
//! - Profile lookup with fail-toward-setup semantics
//! - Route classification and the once-per-settle routing policy
//! - Auth-change subscription with scoped teardown

mod config;
mod policy;
mod service;
mod state;

#[cfg(test)]
mod tests;

pub use config::CoordinatorConfig;
pub use policy::{decide, RouteDecision};
pub use service::{AuthSubscription, SessionRoleCoordinator};
pub use state::{AuthState, CoordinatorState, Phase};
