//! Route classification: derived, never stored.
//!
//! Every concrete path maps to exactly one class. Public overrides the
//! prefix classes, so a public route nested under an area prefix would
//! still classify Public.

use dd_shared::config::RoutingConfig;
use dd_shared::utils::path::{has_prefix_segment, normalize_path};

/// Static categorization of a URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable without a session; never redirected away from
    Public,
    /// Admin console area (owner/manager)
    AdminArea,
    /// Salesperson app area
    AppArea,
    /// Everything else, including the root landing page
    Neutral,
}

impl RouteClass {
    /// Classify a path against the canonical route table
    ///
    /// The path is normalized first, so query strings, fragments, and
    /// trailing slashes do not affect classification.
    pub fn classify(path: &str, routing: &RoutingConfig) -> Self {
        let path = normalize_path(path);

        if routing.public_routes.iter().any(|r| r == &path)
            || path.contains(&routing.auth_callback_fragment)
        {
            return Self::Public;
        }

        if has_prefix_segment(&path, &routing.admin_prefix) {
            return Self::AdminArea;
        }

        if has_prefix_segment(&path, &routing.app_prefix) {
            return Self::AppArea;
        }

        Self::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routing() -> RoutingConfig {
        RoutingConfig::default()
    }

    #[test]
    fn test_public_routes() {
        for path in [
            "/login",
            "/signup",
            "/confirm-email",
            "/setup-complete",
            "/forgot-password",
            "/reset-password",
        ] {
            assert_eq!(
                RouteClass::classify(path, &routing()),
                RouteClass::Public,
                "expected {path} to be Public"
            );
        }
    }

    #[test]
    fn test_auth_callback_fragment_is_public() {
        assert_eq!(
            RouteClass::classify("/api/auth/callback", &routing()),
            RouteClass::Public
        );
        assert_eq!(
            RouteClass::classify("/auth/confirm?token=abc", &routing()),
            RouteClass::Public
        );
    }

    #[test]
    fn test_area_prefixes() {
        assert_eq!(
            RouteClass::classify("/admin", &routing()),
            RouteClass::AdminArea
        );
        assert_eq!(
            RouteClass::classify("/admin/inventory", &routing()),
            RouteClass::AdminArea
        );
        assert_eq!(
            RouteClass::classify("/app/leads", &routing()),
            RouteClass::AppArea
        );
        assert_eq!(
            RouteClass::classify("/app/leads/42", &routing()),
            RouteClass::AppArea
        );
    }

    #[test]
    fn test_prefix_is_segment_aware() {
        assert_eq!(
            RouteClass::classify("/administrator", &routing()),
            RouteClass::Neutral
        );
        assert_eq!(
            RouteClass::classify("/application", &routing()),
            RouteClass::Neutral
        );
    }

    #[test]
    fn test_root_is_neutral() {
        assert_eq!(RouteClass::classify("/", &routing()), RouteClass::Neutral);
    }

    #[test]
    fn test_normalization_before_classification() {
        assert_eq!(
            RouteClass::classify("/login?next=/admin/dashboard", &routing()),
            RouteClass::Public
        );
        assert_eq!(
            RouteClass::classify("/admin/dashboard/", &routing()),
            RouteClass::AdminArea
        );
    }
}
