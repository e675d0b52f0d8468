//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way commands reach persisted contacts.
//! The whole collection is the unit of transfer: `load` returns every contact
//! and `save` replaces every contact. There is no per-record access, no
//! index, and no caching between calls.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: production store, one CSV file
//!   (`first,last,phone,email,address`)
//! - [`memory::InMemoryStore`]: a `Vec` for tests
//!
//! Neither implementation locks. Two processes writing the same file race.

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the full collection, in stored order. A missing backing file is
    /// an empty collection.
    fn load(&self) -> Result<Vec<Contact>>;

    /// Replace the full collection.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;
}
