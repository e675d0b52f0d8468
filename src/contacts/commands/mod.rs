//! # Command Layer
//!
//! One module per operation. Each `run` is a complete load, mutate, save
//! unit against a [`DataStore`](crate::store::DataStore): nothing is cached
//! between calls, and nothing is written unless the operation changed the
//! collection.
//!
//! Outcomes that are not failures ("not found", "already exists") come back
//! as [`CmdMessage`]s in an `Ok` result. Only validation and I/O problems are
//! errors.

use crate::config::ContactsConfig;
use crate::model::Contact;

pub mod add;
pub mod config;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;

pub const MSG_ADDED: &str = "Contact added successfully!";
pub const MSG_EXISTS: &str = "Contact already exists.";
pub const MSG_DELETED: &str = "Contact deleted successfully.";
pub const MSG_UPDATED: &str = "Contact updated successfully.";
pub const MSG_NOT_FOUND: &str = "Contact not found.";
pub const MSG_EMPTY: &str = "No contacts available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Contacts created, changed or removed by the command.
    pub affected_contacts: Vec<Contact>,
    /// Contacts the caller should display.
    pub listed_contacts: Vec<Contact>,
    pub config: Option<ContactsConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_config(mut self, config: ContactsConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Text of the first message, if any.
    pub fn message(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}
