//! Client-side form validation
//!
//! Each check returns the user-facing message of the first failure as a
//! `NumerologyError::Validation`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::messages;
use crate::constants::{MAX_PHONE_DIGITS, MIN_PASSWORD_LENGTH, MIN_PHONE_DIGITS};
use crate::{NumerologyError, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

static BIRTH_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").unwrap()
});

fn invalid(message: &str) -> NumerologyError {
    NumerologyError::Validation(message.to_string())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Phone is optional; when present it must carry 7 to 15 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

pub fn is_valid_birth_date(value: &str) -> bool {
    BIRTH_DATE_RE.is_match(value)
}

/// Login form: both fields present, email well-formed.
pub fn validate_login(email: &str, password: &str) -> Result<()> {
    if email.is_empty() || password.is_empty() {
        return Err(invalid(messages::FILL_ALL_FIELDS));
    }
    if !is_valid_email(email) {
        return Err(invalid(messages::INVALID_EMAIL));
    }
    Ok(())
}

/// Registration form fields, checked in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub password: String,
    pub password_confirm: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid(messages::NAME_REQUIRED));
        }
        if self.email.trim().is_empty() {
            return Err(invalid(messages::EMAIL_REQUIRED));
        }
        if !is_valid_email(&self.email) {
            return Err(invalid(messages::INVALID_EMAIL));
        }
        if !is_valid_phone(&self.phone) {
            return Err(invalid(messages::INVALID_PHONE));
        }
        if !is_valid_birth_date(&self.birth_date) {
            return Err(invalid(messages::INVALID_BIRTH_DATE));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(invalid(messages::PASSWORD_TOO_SHORT));
        }
        if self.password != self.password_confirm {
            return Err(invalid(messages::PASSWORDS_DO_NOT_MATCH));
        }
        Ok(())
    }
}

pub fn validate_verification_code(code: &str) -> Result<()> {
    if code.len() != crate::constants::VERIFICATION_CODE_LENGTH
        || !code.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid(messages::INVALID_CODE_LENGTH));
    }
    Ok(())
}
