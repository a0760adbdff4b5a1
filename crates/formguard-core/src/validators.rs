//! Field validators for form input
//!
//! One pure function per semantic field type. Each validator trims the raw
//! value, evaluates its checks in a fixed priority order and returns on the
//! first failure, so the caller gets a single actionable message per field.
//! An absent value (`None`, or empty after trimming) is a required-field
//! failure unless the field is documented optional (phone).

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::result::{SeoValidation, ValidationResult};

lazy_static! {
    /// Letters (incl. accented Latin and ñ), spaces, hyphen, apostrophe
    static ref NAME_REGEX: Regex = Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s'-]+$").unwrap();

    /// local@domain.tld shape: no embedded whitespace, one '@', a '.' after it
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Separators tolerated in phone numbers before matching
    static ref PHONE_STRIP_REGEX: Regex = Regex::new(r"[\s().-]").unwrap();

    /// Optional +506 prefix, then 8 digits with leading digit 2-8
    static ref PHONE_REGEX: Regex = Regex::new(r"^(\+506)?[2-8]\d{7}$").unwrap();

    /// Costa Rican IBAN: CR + 2 control digits + 18 account digits
    static ref IBAN_REGEX: Regex = Regex::new(r"^CR\d{20}$").unwrap();

    /// Separators tolerated in SINPE handles (narrower set than phone: no dot)
    static ref SINPE_STRIP_REGEX: Regex = Regex::new(r"[\s()-]").unwrap();

    /// Optional +506 prefix, then 8 digits with leading digit 5-8.
    /// The leading-digit set is mobile-only and intentionally distinct from
    /// the landline-inclusive phone set; do not unify the two.
    static ref SINPE_REGEX: Regex = Regex::new(r"^(\+506)?[5-8]\d{7}$").unwrap();

    /// H[H]:MM with hour 1-12, minute 00-59, then AM/PM with optional space
    static ref TIME_REGEX: Regex =
        Regex::new(r"(?i)^(0?[1-9]|1[0-2]):([0-5][0-9])\s?(AM|PM)$").unwrap();

    /// Two time-of-day patterns joined by a hyphen with optional spaces.
    /// The halves are not cross-validated: a range whose start is later than
    /// its end is accepted.
    static ref TIME_RANGE_REGEX: Regex = Regex::new(
        r"(?i)^(0?[1-9]|1[0-2]):([0-5][0-9])\s?(AM|PM)\s?-\s?(0?[1-9]|1[0-2]):([0-5][0-9])\s?(AM|PM)$"
    )
    .unwrap();
}

/// Maximum length for the name field
const MAX_NAME_LENGTH: usize = 100;
/// Minimum length for the name field
const MIN_NAME_LENGTH: usize = 2;
/// Maximum length for an email address
const MAX_EMAIL_LENGTH: usize = 254;
/// Minimum length for the message field
const MIN_MESSAGE_LENGTH: usize = 10;
/// Maximum length for the message field
const MAX_MESSAGE_LENGTH: usize = 2000;
/// Exact length of a normalized Costa Rican IBAN
const IBAN_LENGTH: usize = 22;
/// Maximum length for an SEO title
const MAX_SEO_TITLE_LENGTH: usize = 60;
/// Maximum length for an SEO description
const MAX_SEO_DESCRIPTION_LENGTH: usize = 160;

// ─────────────────────────────────────────────────────────────────────────────
// Contact form fields
// ─────────────────────────────────────────────────────────────────────────────

/// Validate a person's name: required, 2-100 characters, letters only.
pub fn validate_name(value: Option<&str>) -> ValidationResult {
    let trimmed = match value {
        Some(v) => v.trim(),
        None => return ValidationResult::fail("Name is required"),
    };

    if trimmed.is_empty() {
        return ValidationResult::fail("Name is required");
    }

    let len = trimmed.chars().count();
    if len < MIN_NAME_LENGTH {
        return ValidationResult::fail("Name must be at least 2 characters");
    }
    if len > MAX_NAME_LENGTH {
        return ValidationResult::fail("Name cannot exceed 100 characters");
    }

    if !NAME_REGEX.is_match(trimmed) {
        return ValidationResult::fail("Name contains invalid characters");
    }

    ValidationResult::ok()
}

/// Validate an email address: required, simple local@domain.tld shape,
/// at most 254 characters. No RFC 5322 edge cases.
pub fn validate_email(value: Option<&str>) -> ValidationResult {
    let trimmed = match value {
        Some(v) => v.trim(),
        None => return ValidationResult::fail("Email is required"),
    };

    if trimmed.is_empty() {
        return ValidationResult::fail("Email is required");
    }

    if !EMAIL_REGEX.is_match(trimmed) {
        return ValidationResult::fail("Email format is not valid");
    }

    if trimmed.chars().count() > MAX_EMAIL_LENGTH {
        return ValidationResult::fail("Email is too long");
    }

    ValidationResult::ok()
}

/// Validate a phone number. The field is optional: an absent or blank value
/// is a success, not a required-field failure.
pub fn validate_phone(value: Option<&str>) -> ValidationResult {
    let raw = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return ValidationResult::ok(),
    };

    let clean = PHONE_STRIP_REGEX.replace_all(raw, "");
    if !PHONE_REGEX.is_match(&clean) {
        return ValidationResult::fail("Phone format is not valid. Use format: +506 8888-8888");
    }

    ValidationResult::ok()
}

/// Validate a free-text message: required, 10-2000 characters, no content
/// restriction beyond presence.
pub fn validate_message(value: Option<&str>) -> ValidationResult {
    let trimmed = match value {
        Some(v) => v.trim(),
        None => return ValidationResult::fail("Message is required"),
    };

    if trimmed.is_empty() {
        return ValidationResult::fail("Message is required");
    }

    let len = trimmed.chars().count();
    if len < MIN_MESSAGE_LENGTH {
        return ValidationResult::fail("Message must be at least 10 characters");
    }
    if len > MAX_MESSAGE_LENGTH {
        return ValidationResult::fail("Message cannot exceed 2000 characters");
    }

    ValidationResult::ok()
}

// ─────────────────────────────────────────────────────────────────────────────
// Donation fields
// ─────────────────────────────────────────────────────────────────────────────

/// Validate a Costa Rican IBAN: CR + 2 control digits + 18 account digits.
///
/// Whitespace is stripped and the value uppercased before matching. The
/// country-prefix check is reported before the full-shape check even though
/// both could fail at once; the two carry distinct messages.
pub fn validate_iban(value: Option<&str>) -> ValidationResult {
    let raw = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return ValidationResult::fail("IBAN is required"),
    };

    let clean: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if clean.chars().count() != IBAN_LENGTH {
        return ValidationResult::fail("IBAN must be 22 characters");
    }

    if !clean.starts_with("CR") {
        return ValidationResult::fail("IBAN must start with CR");
    }

    if !IBAN_REGEX.is_match(&clean) {
        return ValidationResult::fail("IBAN format is not valid");
    }

    ValidationResult::ok()
}

/// Validate a SINPE Móvil handle: required, optional +506 prefix, then a
/// mobile number whose leading digit is in 5-8.
pub fn validate_sinpe(value: Option<&str>) -> ValidationResult {
    let raw = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return ValidationResult::fail("SINPE number is required"),
    };

    let clean = SINPE_STRIP_REGEX.replace_all(raw, "");
    if !SINPE_REGEX.is_match(&clean) {
        return ValidationResult::fail("SINPE format is not valid. Must be a CR mobile number");
    }

    ValidationResult::ok()
}

// ─────────────────────────────────────────────────────────────────────────────
// Page structure fields
// ─────────────────────────────────────────────────────────────────────────────

/// Validate a URL. A value starting with `/` is accepted unconditionally as
/// a relative path; anything else must parse as an absolute URL. The parse
/// failure is caught and converted into a negative result, never propagated.
pub fn validate_url(value: Option<&str>) -> ValidationResult {
    let trimmed = match value {
        Some(v) => v.trim(),
        None => return ValidationResult::fail("URL is required"),
    };

    if trimmed.is_empty() {
        return ValidationResult::fail("URL is required");
    }

    if trimmed.starts_with('/') {
        return ValidationResult::ok();
    }

    match Url::parse(trimmed) {
        Ok(_) => ValidationResult::ok(),
        Err(_) => ValidationResult::fail("URL format is not valid"),
    }
}

/// Validate a time of day in `H[H]:MM AM/PM` form (12-hour clock,
/// case-insensitive meridiem, optional separating space).
pub fn validate_time_format(value: Option<&str>) -> ValidationResult {
    let trimmed = match value {
        Some(v) => v.trim(),
        None => return ValidationResult::fail("Time is required"),
    };

    if trimmed.is_empty() {
        return ValidationResult::fail("Time is required");
    }

    if !TIME_REGEX.is_match(trimmed) {
        return ValidationResult::fail("Time format is not valid. Use HH:MM AM/PM");
    }

    ValidationResult::ok()
}

/// Validate a time range in `H[H]:MM AM - H[H]:MM PM` form. Only the shape
/// is checked; start and end are not compared.
pub fn validate_time_range(value: Option<&str>) -> ValidationResult {
    let trimmed = match value {
        Some(v) => v.trim(),
        None => return ValidationResult::fail("Time range is required"),
    };

    if trimmed.is_empty() {
        return ValidationResult::fail("Time range is required");
    }

    if !TIME_RANGE_REGEX.is_match(trimmed) {
        return ValidationResult::fail("Time range format is not valid. Use HH:MM AM - HH:MM PM");
    }

    ValidationResult::ok()
}

/// SEO metadata pair for a page.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SeoMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Validate SEO metadata. Unlike the single-field validators this checks
/// both fields and accumulates every violation, so the caller gets the
/// complete remediation list at once.
pub fn validate_seo_metadata(metadata: &SeoMetadata) -> SeoValidation {
    let mut errors = Vec::new();

    match metadata.title.as_deref() {
        Some(title) if !title.is_empty() => {
            if title.chars().count() > MAX_SEO_TITLE_LENGTH {
                errors.push("Title must not exceed 60 characters".to_string());
            }
        }
        _ => errors.push("Title is required".to_string()),
    }

    match metadata.description.as_deref() {
        Some(description) if !description.is_empty() => {
            if description.chars().count() > MAX_SEO_DESCRIPTION_LENGTH {
                errors.push("Description must not exceed 160 characters".to_string());
            }
        }
        _ => errors.push("Description is required".to_string()),
    }

    SeoValidation::from_errors(errors)
}
