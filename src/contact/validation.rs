use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ValidationError;
use super::model::{ContactField, ContactRequest};

// Deliberately loose: something@something.something, no whitespace or extra '@'.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns the first problem found, checking required fields in form order
/// before the email shape.
pub fn validate(request: &ContactRequest) -> Result<(), ValidationError> {
    if let Some(field) = ContactField::ALL
        .into_iter()
        .find(|f| request.get(*f).trim().is_empty())
    {
        return Err(ValidationError::EmptyField(field));
    }

    if !is_valid_email(&request.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
