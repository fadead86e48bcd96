use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // local part, one '@', a domain with at least one dot; no whitespace anywhere
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").unwrap();
}

/// Decides whether an email address is acceptable. Pure: no side effects.
pub trait EmailValidator {
    fn validate_email(&self, email: &str) -> bool;
}

/// Format check for email addresses.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserValidator;

impl UserValidator {
    pub fn new() -> Self {
        UserValidator
    }
}

impl EmailValidator for UserValidator {
    fn validate_email(&self, email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }
}
