//! Input Validation Engine
//!
//! This crate provides input validation, sanitization and threat detection
//! for contact/donation form submissions.
//!
//! # Overview
//!
//! The engine consists of five components:
//!
//! 1. **Field validators** - one pure function per semantic field type,
//!    returning a single actionable error (first failing rule wins)
//! 2. **Form aggregator** - runs the field validators over a contact form
//!    record and collects per-field errors
//! 3. **Sanitizer** - entity-escapes HTML-significant characters
//! 4. **Threat detectors** - denylist pattern libraries for XSS and
//!    SQL-injection indicators
//! 5. **Password scorer / header audit** - rule-based checks that accumulate
//!    every unmet requirement
//!
//! Every operation is a synchronous, stateless computation: invalid input
//! maps to a data-carrying negative result, never an error return. The
//! threat detectors are best-effort denylists for audit purposes, not a
//! substitute for server-side defenses.

pub mod form;
pub mod headers;
pub mod password;
pub mod result;
pub mod sanitizer;
pub mod threat;
pub mod validators;

pub use form::{validate_contact_form, ContactForm};
pub use headers::{audit_security_headers, REQUIRED_SECURITY_HEADERS};
pub use password::validate_password_strength;
pub use result::{
    FormValidationResult, HeaderAudit, PasswordScore, SeoValidation, ThreatReport,
    ValidationResult,
};
pub use sanitizer::sanitize_input;
pub use threat::{detect_sql_injection, detect_xss};
pub use validators::{
    validate_email, validate_iban, validate_message, validate_name, validate_phone,
    validate_seo_metadata, validate_sinpe, validate_time_format, validate_time_range,
    validate_url, SeoMetadata,
};
