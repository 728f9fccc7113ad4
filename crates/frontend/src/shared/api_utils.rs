//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build a full API URL from a base and a path
///
/// Exactly one `/` ends up between the two parts, whatever the caller passed.
///
/// # Example
/// ```text
/// api_url("http://127.0.0.1:8000/", "/admin/dashboard")
///     == "http://127.0.0.1:8000/admin/dashboard"
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Path of the agent dashboard endpoint, with the id percent-encoded
pub fn dca_dashboard_path(dca_id: &str) -> String {
    format!("/dca/{}/dashboard", urlencoding::encode(dca_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_slashes() {
        assert_eq!(
            api_url("http://127.0.0.1:8000", "/admin/dashboard"),
            "http://127.0.0.1:8000/admin/dashboard"
        );
        assert_eq!(
            api_url("http://127.0.0.1:8000/", "admin/case"),
            "http://127.0.0.1:8000/admin/case"
        );
        assert_eq!(
            api_url("http://host//", "//admin/case"),
            "http://host/admin/case"
        );
    }

    #[test]
    fn test_dca_dashboard_path() {
        assert_eq!(dca_dashboard_path("1"), "/dca/1/dashboard");
        assert_eq!(dca_dashboard_path("a b/c"), "/dca/a%20b%2Fc/dashboard");
    }
}
