//! Client-side form validation
//!
//! Checks run in a fixed order and stop at the first failure, so the user
//! sees one message at a time and nothing is submitted until all pass.

use crate::forms::{ContactSubmission, JobApplication};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern is valid")
});

/// Minimum number of digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 10;

/// Why a form was refused before submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is blank
    #[error("Please fill in all required fields")]
    MissingFields {
        /// Names of the blank required fields
        fields: Vec<&'static str>,
    },

    /// The email does not look like `local@domain.tld`
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// The phone has bad characters or too few digits
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Check that an email looks like `local@domain.tld`
///
/// Deliberately permissive: no consecutive-dot or TLD-length checks.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a phone number: digits, whitespace, `-`, `+`, `(`, `)` only,
/// with at least [`MIN_PHONE_DIGITS`] digits
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone) && phone.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

fn missing(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    let blank: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if blank.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { fields: blank })
    }
}

/// Validate the contact form
///
/// Required: name, email, subject, message. Phone is optional and its shape
/// is not checked on this form.
pub fn validate_contact_form(form: &ContactSubmission) -> Result<(), ValidationError> {
    missing(&[
        ("name", &form.name),
        ("email", &form.email),
        ("subject", &form.subject),
        ("message", &form.message),
    ])?;

    if !validate_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate the job application form
///
/// Required: role, name, email, phone, experience. The message is optional.
pub fn validate_job_application(form: &JobApplication) -> Result<(), ValidationError> {
    missing(&[
        ("role", &form.role),
        ("name", &form.name),
        ("email", &form.email),
        ("phone", &form.phone),
        ("experience", &form.experience),
    ])?;

    if !validate_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !validate_phone(&form.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}
