//! Security header knowledge base.
//!
//! This module defines the lowercase keys of the security headers the checker
//! looks for, along with the static metadata reported for each one.

use crate::security::{HeaderSpec, Severity};

// Security header keys (lowercase, as compared against responses)
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "strict-transport-security";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "referrer-policy";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "permissions-policy";
/// Cross-Origin-Opener-Policy header
pub const HEADER_CROSS_ORIGIN_OPENER_POLICY: &str = "cross-origin-opener-policy";
/// Cross-Origin-Embedder-Policy header
pub const HEADER_CROSS_ORIGIN_EMBEDDER_POLICY: &str = "cross-origin-embedder-policy";
/// Expect-CT header
pub const HEADER_EXPECT_CT: &str = "expect-ct";

/// Set-Cookie header. Collected separately since it may occur many times.
pub const HEADER_SET_COOKIE: &str = "set-cookie";

/// Security headers checked on every response, in report order.
/// To add/remove headers, modify this array.
pub static HEADER_SPECS: [HeaderSpec; 9] = [
    HeaderSpec {
        key: HEADER_STRICT_TRANSPORT_SECURITY,
        name: "Strict-Transport-Security (HSTS)",
        description: "Instructs browsers to only use HTTPS for this domain for a period.",
        impact: "Without HSTS, users may be vulnerable to downgrade and MitM attacks.",
        remediation: "Serve 'Strict-Transport-Security' over HTTPS with a suitable 'max-age'.",
        severity: Severity::High,
    },
    HeaderSpec {
        key: HEADER_CONTENT_SECURITY_POLICY,
        name: "Content-Security-Policy (CSP)",
        description: "Controls which sources of content (scripts, images, styles) are allowed.",
        impact: "Missing CSP increases XSS risk.",
        remediation: "Implement a restrictive CSP that whitelists trusted sources.",
        severity: Severity::High,
    },
    HeaderSpec {
        key: HEADER_X_FRAME_OPTIONS,
        name: "X-Frame-Options",
        description: "Prevents the site from being embedded in frames/iframes on other origins.",
        impact: "Without it, the site may be vulnerable to clickjacking-like UI attacks.",
        remediation: "Return 'X-Frame-Options: DENY' or 'SAMEORIGIN'.",
        severity: Severity::Medium,
    },
    HeaderSpec {
        key: HEADER_X_CONTENT_TYPE_OPTIONS,
        name: "X-Content-Type-Options",
        description: "Stops browsers from sniffing MIME types.",
        impact: "Without it, browsers might run content as a different type.",
        remediation: "Return 'X-Content-Type-Options: nosniff'.",
        severity: Severity::Medium,
    },
    HeaderSpec {
        key: HEADER_REFERRER_POLICY,
        name: "Referrer-Policy",
        description: "Controls what referrer information is sent when navigating away.",
        impact: "No policy may leak sensitive URL/query information to third parties.",
        remediation:
            "Set a restrictive policy like 'no-referrer' or 'strict-origin-when-cross-origin'.",
        severity: Severity::Low,
    },
    HeaderSpec {
        key: HEADER_PERMISSIONS_POLICY,
        name: "Permissions-Policy (Feature-Policy)",
        description: "Controls access to browser features like camera, geolocation.",
        impact: "Without it, features may be available when not desired.",
        remediation: "Disable unused features, e.g. 'geolocation=()'.",
        severity: Severity::Low,
    },
    HeaderSpec {
        key: HEADER_CROSS_ORIGIN_OPENER_POLICY,
        name: "Cross-Origin-Opener-Policy (COOP)",
        description: "Helps isolate browsing contexts to reduce cross-origin leaks.",
        impact: "Missing COOP may increase risk of certain side-channel attacks.",
        remediation: "Consider 'Cross-Origin-Opener-Policy: same-origin'.",
        severity: Severity::Low,
    },
    HeaderSpec {
        key: HEADER_CROSS_ORIGIN_EMBEDDER_POLICY,
        name: "Cross-Origin-Embedder-Policy (COEP)",
        description: "Controls loading of cross-origin resources unless allowed by CORS.",
        impact: "Without it, some isolation guarantees are weaker.",
        remediation: "Consider 'Cross-Origin-Embedder-Policy: require-corp' if needed.",
        severity: Severity::Low,
    },
    HeaderSpec {
        key: HEADER_EXPECT_CT,
        name: "Expect-CT",
        description: "Helps detect misissued TLS certificates.",
        impact: "Missing Expect-CT reduces visibility into certificate issues.",
        remediation: "Use with a reporting endpoint if you understand implications.",
        severity: Severity::Low,
    },
];

/// Looks up the metadata for a header key, ignoring case.
pub fn find_spec(key: &str) -> Option<&'static HeaderSpec> {
    HEADER_SPECS
        .iter()
        .find(|spec| spec.key.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_header_specs_keys_are_lowercase() {
        for spec in HEADER_SPECS.iter() {
            assert_eq!(spec.key, spec.key.to_lowercase(), "{} must be lowercase", spec.key);
        }
    }

    #[test]
    fn test_header_specs_keys_are_unique() {
        let keys: HashSet<&str> = HEADER_SPECS.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), HEADER_SPECS.len());
    }

    #[test]
    fn test_header_specs_have_metadata() {
        for spec in HEADER_SPECS.iter() {
            assert!(!spec.name.is_empty());
            assert!(!spec.description.is_empty());
            assert!(!spec.impact.is_empty());
            assert!(!spec.remediation.is_empty());
        }
    }

    #[test]
    fn test_set_cookie_is_not_a_checked_header() {
        assert!(find_spec(HEADER_SET_COOKIE).is_none());
    }

    #[test]
    fn test_find_spec_ignores_case() {
        let spec = find_spec("Content-Security-Policy").expect("CSP should be known");
        assert_eq!(spec.key, HEADER_CONTENT_SECURITY_POLICY);
        assert_eq!(spec.severity, Severity::High);
        assert!(find_spec("X-Powered-By").is_none());
    }

    #[test]
    fn test_severity_assignments() {
        let high: Vec<&str> = HEADER_SPECS
            .iter()
            .filter(|s| s.severity == Severity::High)
            .map(|s| s.key)
            .collect();
        assert_eq!(
            high,
            vec![HEADER_STRICT_TRANSPORT_SECURITY, HEADER_CONTENT_SECURITY_POLICY]
        );
        assert_eq!(
            find_spec(HEADER_X_FRAME_OPTIONS).map(|s| s.severity),
            Some(Severity::Medium)
        );
        assert_eq!(find_spec(HEADER_EXPECT_CT).map(|s| s.severity), Some(Severity::Low));
    }
}
