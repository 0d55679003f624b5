use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::quiz::answers::{phone_digits, Field, QuizAnswers, PHONE_LEN};
use crate::quiz::variant::{EmailRule, PhoneRule};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Enter a valid 10-digit phone number")]
    InvalidLength,
    #[error("Enter a valid US phone number")]
    InvalidNumber,
    #[error("Enter a valid email address")]
    InvalidFormat,
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

/// Checks the contact step. Each field is judged on its own.
pub fn validate(answers: &QuizAnswers, email_rule: EmailRule, phone_rule: PhoneRule) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if answers.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, FieldError::Required("Name"));
    }

    if let Some(err) = check_phone(&answers.phone, phone_rule) {
        errors.insert(Field::Phone, err);
    }

    if let Some(err) = check_email(&answers.email, email_rule) {
        errors.insert(Field::Email, err);
    }

    errors
}

fn check_phone(raw: &str, rule: PhoneRule) -> Option<FieldError> {
    let digits = phone_digits(raw);
    if digits.is_empty() {
        return Some(FieldError::Required("Phone"));
    }
    if digits.len() != PHONE_LEN {
        return Some(FieldError::InvalidLength);
    }
    if rule == PhoneRule::Enhanced {
        let bytes = digits.as_bytes();
        // NANP: area code and exchange can't start with 0 or 1
        if matches!(bytes[0], b'0' | b'1') || matches!(bytes[3], b'0' | b'1') {
            return Some(FieldError::InvalidNumber);
        }
    }
    None
}

fn check_email(raw: &str, rule: EmailRule) -> Option<FieldError> {
    let email = raw.trim();
    match rule {
        EmailRule::OptionalUnchecked => None,
        EmailRule::Required if email.is_empty() => Some(FieldError::Required("Email")),
        EmailRule::OptionalStrict if email.is_empty() => None,
        EmailRule::Required | EmailRule::OptionalStrict => {
            (!EMAIL_RE.is_match(email)).then_some(FieldError::InvalidFormat)
        }
    }
}
