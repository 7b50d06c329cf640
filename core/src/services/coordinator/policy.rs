//! Routing policy: pure decision function, evaluated once per settle.
//!
//! Loop prevention is structural: the policy runs once when the coordinator
//! settles, every redirect target is a fixed point of the policy, and a
//! target equal to the current path is never pushed.

use dd_shared::config::RoutingConfig;
use dd_shared::utils::path::normalize_path;

use crate::domain::value_objects::route_class::RouteClass;

use super::state::AuthState;

/// Outcome of one policy evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Current path is compatible with the settled state
    Stay,
    /// Navigate to the contained path
    Navigate(String),
}

/// Decide whether the current path is compatible with the settled state
///
/// Rules, in order:
/// 1. Public paths are never redirected away from (the unconditional
///    sign-out eviction happens outside this function).
/// 2. Without a session, non-Public paths go to the root.
/// 3. A session without a profile goes to the setup path.
/// 4. With a profile, owner/manager are kept out of the app area and off
///    neutral pages; salesperson out of the admin area and off neutral
///    pages.
pub fn decide(state: &AuthState, current_path: &str, routing: &RoutingConfig) -> RouteDecision {
    let path = normalize_path(current_path);
    let class = RouteClass::classify(&path, routing);

    if class == RouteClass::Public {
        return RouteDecision::Stay;
    }

    let target = match state {
        // Not settled: the policy has nothing to enforce yet
        AuthState::Init | AuthState::Probing => return RouteDecision::Stay,

        AuthState::Unauthenticated | AuthState::Failed => routing.root_path.as_str(),

        AuthState::AwaitingSetup => routing.setup_path.as_str(),

        AuthState::Active(role) => {
            if role.is_admin() {
                match class {
                    RouteClass::AppArea | RouteClass::Neutral => routing.admin_home.as_str(),
                    _ => return RouteDecision::Stay,
                }
            } else {
                match class {
                    RouteClass::AdminArea | RouteClass::Neutral => routing.app_home.as_str(),
                    _ => return RouteDecision::Stay,
                }
            }
        }
    };

    if normalize_path(target) == path {
        RouteDecision::Stay
    } else {
        RouteDecision::Navigate(target.to_string())
    }
}
