//! Threat detectors for XSS and SQL-injection indicators
//!
//! Each detector holds an ordered, immutable table of (category, pattern)
//! pairs evaluated against the raw, unsanitized input. Every matching
//! category is reported once, in the table's declaration order regardless of
//! match position. These are denylist heuristics for test/audit purposes:
//! the contract is "detects known bad patterns", not "proves input is safe".

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::result::ThreatReport;

/// A named detection pattern.
struct ThreatPattern {
    category: &'static str,
    regex: Regex,
}

impl ThreatPattern {
    fn new(category: &'static str, pattern: &str) -> Self {
        Self {
            category,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

lazy_static! {
    /// XSS indicator patterns, in fixed report order.
    static ref XSS_PATTERNS: Vec<ThreatPattern> = vec![
        // Paired script element; matching spans the closing tag
        ThreatPattern::new("Script tag", r"(?is)<script\b.*?</script>"),
        ThreatPattern::new("Event handler", r"(?i)on\w+\s*="),
        ThreatPattern::new("JavaScript protocol", r"(?i)javascript:"),
        ThreatPattern::new("Data protocol", r"(?i)data:"),
        ThreatPattern::new("Expression", r"(?i)expression\s*\("),
        ThreatPattern::new("Iframe", r"(?i)<iframe"),
        ThreatPattern::new("Object tag", r"(?i)<object"),
        ThreatPattern::new("Embed tag", r"(?i)<embed"),
        ThreatPattern::new("SVG onload", r"(?i)<svg[^>]*onload"),
    ];

    /// SQL-injection indicator patterns, in fixed report order.
    static ref SQL_PATTERNS: Vec<ThreatPattern> = vec![
        ThreatPattern::new("UNION SELECT", r"(?i)union\s+select"),
        ThreatPattern::new("DROP TABLE", r"(?i)drop\s+table"),
        ThreatPattern::new("DELETE FROM", r"(?i)delete\s+from"),
        ThreatPattern::new("INSERT INTO", r"(?i)insert\s+into"),
        ThreatPattern::new("OR 1=1", r"(?i)or\s+1\s*=\s*1"),
        // The bare comment marker is matched literally, not case-folded
        ThreatPattern::new("Comment injection", r"--"),
        ThreatPattern::new("Semicolon injection", r"(?i);\s*(drop|delete|insert|update)"),
    ];
}

fn scan(patterns: &[ThreatPattern], input: Option<&str>, kind: &str) -> ThreatReport {
    let raw = match input {
        Some(v) if !v.is_empty() => v,
        _ => return ThreatReport::clean(),
    };

    let threats: Vec<&'static str> = patterns
        .iter()
        .filter(|p| p.regex.is_match(raw))
        .map(|p| p.category)
        .collect();

    if !threats.is_empty() {
        debug!(kind, ?threats, "threat patterns matched");
    }

    ThreatReport::from_threats(threats)
}

/// Scan input for cross-site-scripting indicators.
pub fn detect_xss(input: Option<&str>) -> ThreatReport {
    scan(&XSS_PATTERNS, input, "xss")
}

/// Scan input for SQL-injection indicators.
pub fn detect_sql_injection(input: Option<&str>) -> ThreatReport {
    scan(&SQL_PATTERNS, input, "sql_injection")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_script_tag() {
        let report = detect_xss(Some("<script>alert(1)</script>"));
        assert!(report.has_threat);
        assert!(report.threats.contains(&"Script tag"));
    }

    #[test]
    fn test_detect_event_handler() {
        let report = detect_xss(Some(r#"<img src="x" onerror="alert(1)">"#));
        assert!(report.has_threat);
        assert!(report.threats.contains(&"Event handler"));
    }

    #[test]
    fn test_detect_javascript_protocol() {
        let report = detect_xss(Some(r#"<a href="javascript:alert(1)">Click</a>"#));
        assert!(report.threats.contains(&"JavaScript protocol"));
    }

    #[test]
    fn test_detect_iframe_and_svg() {
        assert!(detect_xss(Some(r#"<iframe src="evil.example"></iframe>"#))
            .threats
            .contains(&"Iframe"));
        assert!(detect_xss(Some(r#"<svg onload="alert(1)">"#)).has_threat);
    }

    #[test]
    fn test_xss_category_reported_once() {
        let report = detect_xss(Some("javascript:a javascript:b javascript:c"));
        assert_eq!(report.threats, vec!["JavaScript protocol"]);
    }

    #[test]
    fn test_xss_declaration_order_not_match_order() {
        // Iframe appears first in the input, Event handler first in the table
        let report = detect_xss(Some(r#"<iframe src=x></iframe><img onerror=1>"#));
        assert_eq!(report.threats, vec!["Event handler", "Iframe"]);
    }

    #[test]
    fn test_xss_no_false_positives() {
        assert!(!detect_xss(Some("Hello, this is a normal message")).has_threat);
        assert!(!detect_xss(Some("<p>Plain paragraph</p>")).has_threat);
        assert!(!detect_xss(Some("")).has_threat);
        assert!(!detect_xss(None).has_threat);
    }

    #[test]
    fn test_detect_union_select() {
        let report = detect_sql_injection(Some("' UNION SELECT * FROM users--"));
        assert!(report.has_threat);
        assert!(report.threats.contains(&"UNION SELECT"));
        assert!(report.threats.contains(&"Comment injection"));
    }

    #[test]
    fn test_detect_tautology() {
        let report = detect_sql_injection(Some("' OR 1=1--"));
        assert!(report.has_threat);
        assert!(report.threats.contains(&"OR 1=1"));
    }

    #[test]
    fn test_detect_chained_destructive_statement() {
        let report = detect_sql_injection(Some("'; DROP TABLE users;--"));
        assert!(report.threats.contains(&"DROP TABLE"));
        assert!(report.threats.contains(&"Semicolon injection"));

        let report = detect_sql_injection(Some("'; DELETE FROM users WHERE 1=1;--"));
        assert!(report.threats.contains(&"DELETE FROM"));
    }

    #[test]
    fn test_comment_marker_is_literal() {
        assert!(detect_sql_injection(Some("a--b")).has_threat);
        // A single dash is not the comment marker
        assert!(!detect_sql_injection(Some("well-formed")).has_threat);
    }

    #[test]
    fn test_sql_no_false_positives() {
        assert!(!detect_sql_injection(Some("Juan Pérez")).has_threat);
        assert!(!detect_sql_injection(Some("user@example.com")).has_threat);
        assert!(!detect_sql_injection(Some("")).has_threat);
        assert!(!detect_sql_injection(None).has_threat);
    }

    #[test]
    fn test_case_insensitive_keywords() {
        assert!(detect_sql_injection(Some("union select 1"))
            .threats
            .contains(&"UNION SELECT"));
        assert!(detect_sql_injection(Some("UnIoN   sElEcT 1"))
            .threats
            .contains(&"UNION SELECT"));
    }
}
