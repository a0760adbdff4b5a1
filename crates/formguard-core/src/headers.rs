//! Security-header presence audit

use crate::result::HeaderAudit;

/// Headers every response is expected to carry, in report order.
pub const REQUIRED_SECURITY_HEADERS: [&str; 5] = [
    "Content-Security-Policy",
    "X-Content-Type-Options",
    "X-Frame-Options",
    "X-XSS-Protection",
    "Strict-Transport-Security",
];

/// Check which required security headers are present. Input order does not
/// matter; missing headers are reported in the required-list order. Names
/// are compared exactly; callers normalize case.
pub fn audit_security_headers<S: AsRef<str>>(present: &[S]) -> HeaderAudit {
    let missing: Vec<&'static str> = REQUIRED_SECURITY_HEADERS
        .iter()
        .copied()
        .filter(|required| !present.iter().any(|h| h.as_ref() == *required))
        .collect();

    HeaderAudit::from_missing(missing)
}
