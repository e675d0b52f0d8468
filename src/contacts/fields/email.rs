use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("valid email regex"));

/// An email address in the loose `local@domain.tld` shape.
///
/// One `@`, something on both sides, and a `.` in the domain with something
/// after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the value does not match
    /// `<local>@<domain>.<tld>`.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }
        Ok(Self(email))
    }

    /// Empty input means "no email"; anything else must validate.
    pub fn parse_optional(email: &str) -> Result<Option<Self>, ValidationError> {
        if email.is_empty() {
            return Ok(None);
        }
        Self::new(email).map(Some)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
