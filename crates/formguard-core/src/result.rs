//! Result value objects returned by the validation engine
//!
//! All results are plain immutable data: the caller always receives a value
//! it can render, never an error to propagate. Constructors enforce the
//! pairing invariants (an error message is present exactly when the check
//! failed).

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a single-field validation check.
///
/// `error` is `Some` exactly when `is_valid` is false. Use
/// [`ValidationResult::ok`] and [`ValidationResult::fail`] to construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Outcome of validating a whole contact form.
///
/// `is_valid` holds exactly when `errors` is empty; each failing field
/// contributes one non-empty message keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl FormValidationResult {
    pub fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Report from a threat detector.
///
/// `threats` preserves the pattern library's declaration order, with each
/// category listed at most once. `has_threat` holds exactly when the list is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreatReport {
    pub has_threat: bool,
    pub threats: Vec<&'static str>,
}

impl ThreatReport {
    pub fn clean() -> Self {
        Self {
            has_threat: false,
            threats: vec![],
        }
    }

    pub fn from_threats(threats: Vec<&'static str>) -> Self {
        Self {
            has_threat: !threats.is_empty(),
            threats,
        }
    }
}

/// Password strength report.
///
/// `score` is in `0..=6`; `is_strong` holds exactly when `score >= 5`.
/// `errors` lists every unmet requirement, independent of the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordScore {
    pub is_strong: bool,
    pub score: u8,
    pub errors: Vec<String>,
}

impl PasswordScore {
    pub fn new(score: u8, errors: Vec<String>) -> Self {
        Self {
            is_strong: score >= 5,
            score,
            errors,
        }
    }
}

/// SEO metadata validation report; accumulates every violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl SeoValidation {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Security-header audit report; lists every absent required header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderAudit {
    pub is_secure: bool,
    pub missing_headers: Vec<&'static str>,
}

impl HeaderAudit {
    pub fn from_missing(missing_headers: Vec<&'static str>) -> Self {
        Self {
            is_secure: missing_headers.is_empty(),
            missing_headers,
        }
    }
}
