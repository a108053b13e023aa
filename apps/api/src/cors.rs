//! Browser origin policy: a static allow-list plus HTTPS wildcard subdomains
//! of two hosting base domains. Requests without an `Origin` header are
//! non-browser clients and are unaffected by CORS.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

const ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:8080",
];

/// Any HTTPS subdomain of these base domains is allowed.
const WILDCARD_BASE_DOMAINS: &[&str] = &["lovable.dev", "lovableproject.com"];

pub fn origin_allowed(origin: &str) -> bool {
    if ALLOWED_ORIGINS.contains(&origin) {
        return true;
    }
    let Some(host) = origin.strip_prefix("https://") else {
        return false;
    };
    WILDCARD_BASE_DOMAINS
        .iter()
        .any(|base| host.len() > base.len() + 1 && host.ends_with(&format!(".{base}")))
}

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            |origin: &HeaderValue, _request_parts| {
                origin.to_str().map(origin_allowed).unwrap_or(false)
            },
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_list_origins_are_allowed() {
        assert!(origin_allowed("http://localhost:3000"));
        assert!(origin_allowed("http://localhost:5173"));
        assert!(origin_allowed("http://localhost:8080"));
    }

    #[test]
    fn https_subdomains_of_base_domains_are_allowed() {
        assert!(origin_allowed("https://foo.lovable.dev"));
        assert!(origin_allowed("https://preview--app.lovable.dev"));
        assert!(origin_allowed("https://abc123.lovableproject.com"));
    }

    #[test]
    fn unknown_origins_are_rejected() {
        assert!(!origin_allowed("https://evil.com"));
        assert!(!origin_allowed("http://localhost:9999"));
    }

    #[test]
    fn wildcard_requires_https() {
        assert!(!origin_allowed("http://foo.lovable.dev"));
    }

    #[test]
    fn bare_base_domain_is_not_a_subdomain() {
        assert!(!origin_allowed("https://lovable.dev"));
    }

    #[test]
    fn suffix_lookalikes_are_rejected() {
        assert!(!origin_allowed("https://notlovable.dev"));
        assert!(!origin_allowed("https://foo.lovable.dev.evil.com"));
    }
}
