//! Password strength scoring
//!
//! Six independent rules each contribute at most one point; every unmet
//! requirement is reported, not just the first. The score is independent of
//! the error list: the 12-character rule is a bonus point with no message
//! when unmet.

use crate::result::PasswordScore;

/// Characters accepted by the special-character rule.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum acceptable password length
const MIN_LENGTH: usize = 8;
/// Length granting the bonus point
const BONUS_LENGTH: usize = 12;

/// Score a password against six rules. A password is strong when it scores
/// at least 5 of 6. An absent or empty password short-circuits to score 0
/// with a single required-field error, without evaluating the rules.
pub fn validate_password_strength(password: Option<&str>) -> PasswordScore {
    let password = match password {
        Some(p) if !p.is_empty() => p,
        _ => return PasswordScore::new(0, vec!["Password is required".to_string()]),
    };

    let mut score = 0u8;
    let mut errors = Vec::new();
    let length = password.chars().count();

    if length >= MIN_LENGTH {
        score += 1;
    } else {
        errors.push("Must be at least 8 characters".to_string());
    }

    // Bonus point only; no error when unmet
    if length >= BONUS_LENGTH {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    } else {
        errors.push("Must include lowercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    } else {
        errors.push("Must include uppercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    } else {
        errors.push("Must include numbers".to_string());
    }

    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        score += 1;
    } else {
        errors.push("Must include special characters".to_string());
    }

    PasswordScore::new(score, errors)
}
