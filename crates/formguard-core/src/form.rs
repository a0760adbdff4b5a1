//! Contact form record and aggregate validation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::result::FormValidationResult;
use crate::validators::{validate_email, validate_message, validate_name, validate_phone};

/// Raw contact form submission. Fields are optional because the caller may
/// hand over a partially filled record; absence is judged by the individual
/// field validators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// Validate every contact form field independently and collect each failing
/// field's message keyed by field name. A failure in one field never
/// suppresses evaluation of the others, and no validator sees another
/// validator's output.
pub fn validate_contact_form(form: &ContactForm) -> FormValidationResult {
    let checks = [
        ("name", validate_name(form.name.as_deref())),
        ("email", validate_email(form.email.as_deref())),
        ("phone", validate_phone(form.phone.as_deref())),
        ("message", validate_message(form.message.as_deref())),
    ];

    let mut errors = BTreeMap::new();
    for (field, result) in checks {
        if let Some(message) = result.error {
            errors.insert(field.to_string(), message);
        }
    }

    if !errors.is_empty() {
        debug!(failed_fields = errors.len(), "contact form rejected");
    }

    FormValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: Some("Juan Pérez".to_string()),
            email: Some("juan@example.com".to_string()),
            phone: Some("+506 8888-8888".to_string()),
            message: Some("I would like to know the mass schedule".to_string()),
        }
    }

    #[test]
    fn test_valid_form() {
        let result = validate_contact_form(&valid_form());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_blank_phone_is_not_an_error() {
        let mut form = valid_form();
        form.phone = None;
        assert!(validate_contact_form(&form).is_valid);

        form.phone = Some("".to_string());
        assert!(validate_contact_form(&form).is_valid);
    }

    #[test]
    fn test_one_bad_field_does_not_suppress_others() {
        let form = ContactForm {
            name: Some("J".to_string()),
            email: Some("not-an-email".to_string()),
            phone: Some("123".to_string()),
            message: Some("short".to_string()),
        };

        let result = validate_contact_form(&form);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 4);
        assert!(result.errors.contains_key("name"));
        assert!(result.errors.contains_key("email"));
        assert!(result.errors.contains_key("phone"));
        assert!(result.errors.contains_key("message"));
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let result = validate_contact_form(&ContactForm::default());
        assert!(!result.is_valid);
        // Phone is optional; the other three are required
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.errors["name"], "Name is required");
        assert_eq!(result.errors["email"], "Email is required");
        assert_eq!(result.errors["message"], "Message is required");
    }

    #[test]
    fn test_error_messages_are_field_specific() {
        let mut form = valid_form();
        form.email = Some("test@".to_string());
        let result = validate_contact_form(&form);
        assert_eq!(result.errors["email"], "Email format is not valid");
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_deserializes_from_json() {
        let form: ContactForm = serde_json::from_str(
            r#"{"name": "Ana Mora", "email": "ana@example.com", "message": "Question about the donation process"}"#,
        )
        .unwrap();

        let result = validate_contact_form(&form);
        assert!(result.is_valid, "errors: {:?}", result.errors);
    }
}
