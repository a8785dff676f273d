//! Format checks for participant contact and identity fields.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::ValidationError;

// ASCII classes only: the `regex` crate's `\d` and `\w` are Unicode-aware.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-.]+@[A-Za-z0-9_-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10,11}$").expect("valid phone regex"));
static CPF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{11}$").expect("valid cpf regex"));

/// Checks a simple `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format("email", "Invalid email format"))
    }
}

/// Phone numbers are 10 or 11 digits, area code included, no separators.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            "phone",
            "Invalid phone format. Use only digits including the area code",
        ))
    }
}

/// CPF is exactly 11 digits, no punctuation.
pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if CPF_RE.is_match(cpf) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            "cpf",
            "Invalid CPF format. Use exactly 11 digits",
        ))
    }
}
