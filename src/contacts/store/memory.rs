use super::DataStore;
use crate::error::Result;
use crate::model::Contact;

/// Keeps contacts in memory. Used by command tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.contacts = contacts.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---
