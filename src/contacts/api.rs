//! # API Facade
//!
//! [`ContactsApi`] is the single entry point for every contact operation,
//! whatever the UI. It dispatches to `commands/*.rs` and returns their
//! [`CmdResult`]; it never prints, never exits, and holds no business logic.
//!
//! It is generic over [`DataStore`]: `ContactsApi<CsvStore>` in production,
//! `ContactsApi<InMemoryStore>` in tests. The store decides where contacts
//! live, so pointing the API at another file means building it with another
//! `CsvStore`.

use crate::commands;
use crate::error::Result;
use crate::model::ContactUpdate;
use crate::store::DataStore;
use std::path::PathBuf;

pub struct ContactsApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> ContactsApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn add_contact(
        &mut self,
        first: &str,
        last: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.store, first, last, phone, email, address)
    }

    pub fn search_contacts(&self, first: &str, last: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, first, last)
    }

    pub fn delete_contact(&mut self, first: &str, last: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, first, last)
    }

    pub fn update_contact(
        &mut self,
        first: &str,
        last: &str,
        update: &ContactUpdate,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, first, last, update)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{MSG_ADDED, MSG_DELETED, MSG_EMPTY, MSG_NOT_FOUND, MSG_UPDATED};
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api() -> (TempDir, ContactsApi<InMemoryStore>) {
        let dir = TempDir::new().unwrap();
        let api = ContactsApi::new(InMemoryStore::new(), dir.path().to_path_buf());
        (dir, api)
    }

    #[test]
    fn dispatches_crud_operations() {
        let (_dir, mut api) = api();

        assert_eq!(api.list_contacts().unwrap().message(), Some(MSG_EMPTY));

        let added = api
            .add_contact("Ada", "Lovelace", "1815121018", "ada@example.com", "")
            .unwrap();
        assert_eq!(added.message(), Some(MSG_ADDED));
        assert_eq!(added.affected_contacts.len(), 1);

        let found = api.search_contacts("Ada", "Lovelace").unwrap();
        assert_eq!(found.listed_contacts.len(), 1);

        let updated = api
            .update_contact("Ada", "Lovelace", &ContactUpdate::new().address("London"))
            .unwrap();
        assert_eq!(updated.message(), Some(MSG_UPDATED));
        assert_eq!(updated.affected_contacts[0].address(), "London");

        assert_eq!(
            api.delete_contact("Ada", "Lovelace").unwrap().message(),
            Some(MSG_DELETED)
        );
        assert_eq!(
            api.search_contacts("Ada", "Lovelace").unwrap().message(),
            Some(MSG_NOT_FOUND)
        );
    }

    #[test]
    fn config_uses_config_dir() {
        let (dir, api) = api();
        api.config(ConfigAction::Set("data-file".into(), "x.csv".into()))
            .unwrap();
        assert!(dir.path().join("config.json").exists());
    }
}
