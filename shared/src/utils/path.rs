//! URL path utilities
//!
//! Route classification compares normalized paths: query strings and
//! fragments are stripped and trailing slashes collapsed, so `/login?next=x`
//! and `/login/` both classify like `/login`.

/// Normalize a path for classification
///
/// Strips the query string and fragment, collapses a trailing slash, and
/// guarantees a leading slash. The root path stays `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or("");

    let path = path.trim_end_matches('/');

    if path.is_empty() {
        return String::from("/");
    }

    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Check whether `path` lives under `prefix`, segment-aware
///
/// `/admin` and `/admin/dashboard` match the prefix `/admin`;
/// `/administrator` does not.
pub fn has_prefix_segment(path: &str, prefix: &str) -> bool {
    if path == prefix {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_query_and_fragment() {
        assert_eq!(normalize_path("/login?next=/admin"), "/login");
        assert_eq!(normalize_path("/confirm-email#token"), "/confirm-email");
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(normalize_path("/admin/dashboard/"), "/admin/dashboard");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize_path("login"), "/login");
    }

    #[test]
    fn test_prefix_segment_matching() {
        assert!(has_prefix_segment("/admin", "/admin"));
        assert!(has_prefix_segment("/admin/dashboard", "/admin"));
        assert!(has_prefix_segment("/app/leads/42", "/app"));
        assert!(!has_prefix_segment("/administrator", "/admin"));
        assert!(!has_prefix_segment("/application", "/app"));
        assert!(!has_prefix_segment("/", "/admin"));
    }
}
