//! Unit tests for the routing policy

use dd_shared::config::RoutingConfig;

use crate::domain::entities::profile::DealershipRole;
use crate::services::coordinator::policy::{decide, RouteDecision};
use crate::services::coordinator::state::AuthState;

fn routing() -> RoutingConfig {
    RoutingConfig::default()
}

fn settled_states() -> Vec<AuthState> {
    vec![
        AuthState::Unauthenticated,
        AuthState::Failed,
        AuthState::AwaitingSetup,
        AuthState::Active(DealershipRole::Owner),
        AuthState::Active(DealershipRole::Manager),
        AuthState::Active(DealershipRole::Salesperson),
    ]
}

#[test]
fn test_public_paths_never_redirect() {
    let routing = routing();
    let public_paths = [
        "/login",
        "/signup",
        "/confirm-email",
        "/setup-complete",
        "/forgot-password",
        "/reset-password",
        "/api/auth/callback",
        "/login?next=/admin/dashboard",
    ];

    for state in settled_states() {
        for path in public_paths {
            assert_eq!(
                decide(&state, path, &routing),
                RouteDecision::Stay,
                "expected {state:?} on {path} to stay"
            );
        }
    }
}

#[test]
fn test_unauthenticated_non_public_goes_to_root() {
    let routing = routing();
    for path in ["/admin/dashboard", "/app/leads", "/billing"] {
        assert_eq!(
            decide(&AuthState::Unauthenticated, path, &routing),
            RouteDecision::Navigate("/".to_string())
        );
    }
}

#[test]
fn test_unauthenticated_at_root_stays() {
    assert_eq!(
        decide(&AuthState::Unauthenticated, "/", &routing()),
        RouteDecision::Stay
    );
}

#[test]
fn test_failed_routes_like_unauthenticated() {
    let routing = routing();
    assert_eq!(
        decide(&AuthState::Failed, "/admin/dashboard", &routing),
        RouteDecision::Navigate("/".to_string())
    );
    assert_eq!(decide(&AuthState::Failed, "/", &routing), RouteDecision::Stay);
    assert_eq!(
        decide(&AuthState::Failed, "/login", &routing),
        RouteDecision::Stay
    );
}

#[test]
fn test_awaiting_setup_goes_to_setup_path() {
    let routing = routing();
    for path in ["/admin/dashboard", "/app/leads", "/", "/billing"] {
        assert_eq!(
            decide(&AuthState::AwaitingSetup, path, &routing),
            RouteDecision::Navigate("/setup-complete".to_string())
        );
    }
}

#[test]
fn test_awaiting_setup_is_idempotent_at_target() {
    // Applying the policy from the settled target produces no further
    // navigation
    assert_eq!(
        decide(&AuthState::AwaitingSetup, "/setup-complete", &routing()),
        RouteDecision::Stay
    );
}

#[test]
fn test_admin_roles_bounced_to_admin_home() {
    let routing = routing();
    for role in [DealershipRole::Owner, DealershipRole::Manager] {
        let state = AuthState::Active(role);
        assert_eq!(
            decide(&state, "/app/leads", &routing),
            RouteDecision::Navigate("/admin/dashboard".to_string())
        );
        assert_eq!(
            decide(&state, "/", &routing),
            RouteDecision::Navigate("/admin/dashboard".to_string())
        );
        assert_eq!(decide(&state, "/admin/inventory", &routing), RouteDecision::Stay);
        assert_eq!(decide(&state, "/admin/dashboard", &routing), RouteDecision::Stay);
    }
}

#[test]
fn test_salesperson_bounced_to_app_home() {
    let routing = routing();
    let state = AuthState::Active(DealershipRole::Salesperson);

    assert_eq!(
        decide(&state, "/admin/dashboard", &routing),
        RouteDecision::Navigate("/app/leads".to_string())
    );
    assert_eq!(
        decide(&state, "/", &routing),
        RouteDecision::Navigate("/app/leads".to_string())
    );
    assert_eq!(decide(&state, "/app/leads", &routing), RouteDecision::Stay);
    assert_eq!(decide(&state, "/app/leads/42", &routing), RouteDecision::Stay);
}

#[test]
fn test_redirect_targets_are_fixed_points() {
    // Loop prevention: every target the policy can produce must itself
    // satisfy the policy
    let routing = routing();
    for state in settled_states() {
        for path in ["/", "/admin/dashboard", "/app/leads", "/billing", "/login"] {
            if let RouteDecision::Navigate(target) = decide(&state, path, &routing) {
                assert_eq!(
                    decide(&state, &target, &routing),
                    RouteDecision::Stay,
                    "target {target} for {state:?} is not a fixed point"
                );
            }
        }
    }
}

#[test]
fn test_unsettled_states_never_navigate() {
    let routing = routing();
    for state in [AuthState::Init, AuthState::Probing] {
        for path in ["/", "/admin/dashboard", "/app/leads", "/billing"] {
            assert_eq!(decide(&state, path, &routing), RouteDecision::Stay);
        }
    }
}
