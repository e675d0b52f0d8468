use crate::error::ValidationError;
use std::fmt;

const PHONE_LEN: usize = 10;

/// A ten digit phone number, stored exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value is exactly ten
    /// ASCII decimal digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }
        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_LEN && phone.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
