use crate::error::ValidationError;
use crate::fields::{EmailAddress, FirstName, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column order of the persisted table.
pub const HEADERS: [&str; 5] = ["first", "last", "phone", "email", "address"];

/// One address book entry.
///
/// `(first, last)` identifies a contact. Fields are private so that every
/// assignment goes through a validating setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    first: FirstName,
    last: String,
    phone: PhoneNumber,
    email: Option<EmailAddress>,
    address: String,
}

impl Contact {
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
        phone: impl Into<String>,
        email: &str,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first: FirstName::new(first)?,
            last: last.into(),
            phone: PhoneNumber::new(phone)?,
            email: EmailAddress::parse_optional(email)?,
            address: address.into(),
        })
    }

    pub fn first(&self) -> &str {
        self.first.as_str()
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().map(EmailAddress::as_str)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_first(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.first = FirstName::new(value)?;
        Ok(())
    }

    pub fn set_last(&mut self, value: impl Into<String>) {
        self.last = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.phone = PhoneNumber::new(value)?;
        Ok(())
    }

    /// An empty value clears the email.
    pub fn set_email(&mut self, value: &str) -> Result<(), ValidationError> {
        self.email = EmailAddress::parse_optional(value)?;
        Ok(())
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address = value.into();
    }

    /// Exact, case-sensitive match on the identity pair.
    pub fn matches(&self, first: &str, last: &str) -> bool {
        self.first.as_str() == first && self.last == last
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "First Name: {}, Last Name: {}, Phone: {}, Email: {}, Address: {}",
            self.first,
            self.last,
            self.phone,
            self.email().unwrap_or_default(),
            self.address
        )
    }
}

/// Flat row form of a contact, as read from and written to the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub first: String,
    pub last: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ValidationError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        Contact::new(
            record.first,
            record.last,
            record.phone,
            &record.email,
            record.address,
        )
    }
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            first: contact.first().to_string(),
            last: contact.last().to_string(),
            phone: contact.phone().to_string(),
            email: contact.email().unwrap_or_default().to_string(),
            address: contact.address().to_string(),
        }
    }
}

/// New values for an update. `None` or an empty string keeps the current
/// value, so an update can never clear a field.
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub first: Option<String>,
    pub last: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first(mut self, value: impl Into<String>) -> Self {
        self.first = Some(value.into());
        self
    }

    pub fn last(mut self, value: impl Into<String>) -> Self {
        self.last = Some(value.into());
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.first,
            &self.last,
            &self.phone,
            &self.email,
            &self.address,
        ]
        .iter()
        .all(|v| given(v).is_none())
    }

    /// Applies every given value to `contact`. Either all assignments
    /// validate and the contact is replaced, or it is left untouched.
    pub fn apply(&self, contact: &mut Contact) -> Result<(), ValidationError> {
        let mut updated = contact.clone();
        if let Some(v) = given(&self.first) {
            updated.set_first(v)?;
        }
        if let Some(v) = given(&self.last) {
            updated.set_last(v);
        }
        if let Some(v) = given(&self.phone) {
            updated.set_phone(v)?;
        }
        if let Some(v) = given(&self.email) {
            updated.set_email(v)?;
        }
        if let Some(v) = given(&self.address) {
            updated.set_address(v);
        }
        *contact = updated;
        Ok(())
    }
}

fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Contact {
        Contact::new(
            "John",
            "Harvard",
            "1234567890",
            "john.harvard@example.com",
            "123 Street",
        )
        .unwrap()
    }

    #[test]
    fn builds_valid_contact() {
        let c = john();
        assert_eq!(c.first(), "John");
        assert_eq!(c.last(), "Harvard");
        assert_eq!(c.phone(), "1234567890");
        assert_eq!(c.email(), Some("john.harvard@example.com"));
        assert_eq!(c.address(), "123 Street");
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let c = Contact::new("Test", "", "1112223333", "", "").unwrap();
        assert_eq!(c.email(), None);
        assert_eq!(c.last(), "");
        assert_eq!(c.address(), "");
    }

    #[test]
    fn construction_fails_on_invalid_fields() {
        assert_eq!(
            Contact::new("", "Name", "1112223333", "", ""),
            Err(ValidationError::EmptyFirstName)
        );
        assert!(matches!(
            Contact::new("Test", "Name", "111222", "", ""),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert!(matches!(
            Contact::new("Test", "Name", "1112223333", "invalid-email", ""),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn setters_revalidate_and_keep_old_value_on_failure() {
        let mut c = Contact::new("Test", "Name", "1112223333", "test.name@example.com", "")
            .unwrap();

        assert!(c.set_phone("111222").is_err());
        assert!(c.set_email("invalid-email").is_err());
        assert!(c.set_first("").is_err());

        assert_eq!(c.phone(), "1112223333");
        assert_eq!(c.email(), Some("test.name@example.com"));
        assert_eq!(c.first(), "Test");
    }

    #[test]
    fn matches_is_exact_and_case_sensitive() {
        let c = john();
        assert!(c.matches("John", "Harvard"));
        assert!(!c.matches("john", "Harvard"));
        assert!(!c.matches("John", "Harvard "));
    }

    #[test]
    fn display_lists_all_fields_in_order() {
        assert_eq!(
            john().to_string(),
            "First Name: John, Last Name: Harvard, Phone: 1234567890, \
             Email: john.harvard@example.com, Address: 123 Street"
        );
    }

    #[test]
    fn record_conversion_validates() {
        let record = ContactRecord::from(&john());
        assert_eq!(Contact::try_from(record).unwrap(), john());

        let bad = ContactRecord {
            first: "A".into(),
            phone: "12".into(),
            ..Default::default()
        };
        assert!(Contact::try_from(bad).is_err());
    }

    #[test]
    fn update_replaces_only_given_fields() {
        let mut c = john();
        ContactUpdate::new()
            .phone("5555555555")
            .email("")
            .apply(&mut c)
            .unwrap();
        assert_eq!(c.phone(), "5555555555");
        assert_eq!(c.email(), Some("john.harvard@example.com"));
        assert_eq!(c.address(), "123 Street");
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut c = john();
        let update = ContactUpdate::new().first("").last("");
        assert!(update.is_empty());
        update.apply(&mut c).unwrap();
        assert_eq!(c, john());
    }

    #[test]
    fn failed_update_leaves_contact_untouched() {
        let mut c = john();
        let err = ContactUpdate::new()
            .first("Jonathan")
            .phone("123")
            .apply(&mut c)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhone(_)));
        assert_eq!(c, john());
    }
}
