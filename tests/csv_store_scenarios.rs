//! The address book scenarios end to end against a real CSV file.

use contacts::api::ContactsApi;
use contacts::commands::{MSG_ADDED, MSG_DELETED, MSG_EMPTY, MSG_EXISTS, MSG_NOT_FOUND, MSG_UPDATED};
use contacts::model::{Contact, ContactUpdate};
use contacts::store::fs::CsvStore;
use contacts::store::DataStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, ContactsApi<CsvStore>) {
    let dir = TempDir::new().unwrap();
    let mut store = CsvStore::new(dir.path().join("test_contacts.csv"));
    store
        .save(&[
            Contact::new(
                "John",
                "Harvard",
                "1234567890",
                "john.harvard@example.com",
                "123 Street",
            )
            .unwrap(),
            Contact::new(
                "Harry",
                "Potter",
                "0987654321",
                "harry.potter@example.com",
                "123 Hogwarts",
            )
            .unwrap(),
        ])
        .unwrap();
    let api = ContactsApi::new(store, dir.path().join("config"));
    (dir, api)
}

#[test]
fn test_add_contact() {
    let (_dir, mut api) = setup();
    let result = api
        .add_contact(
            "Hermione",
            "Granger",
            "1112223333",
            "hermione.granger@example.com",
            "123 Hogwarts",
        )
        .unwrap();
    assert_eq!(result.message(), Some(MSG_ADDED));

    let contacts = api.store().load().unwrap();
    assert!(contacts.iter().any(|c| c.matches("Hermione", "Granger")));
}

#[test]
fn test_add_duplicate_contact() {
    let (_dir, mut api) = setup();
    let result = api
        .add_contact("John", "Harvard", "5555555555", "", "")
        .unwrap();
    assert_eq!(result.message(), Some(MSG_EXISTS));

    let johns: Vec<_> = api
        .store()
        .load()
        .unwrap()
        .into_iter()
        .filter(|c| c.matches("John", "Harvard"))
        .collect();
    assert_eq!(johns.len(), 1);
    assert_eq!(johns[0].phone(), "1234567890");
}

#[test]
fn test_delete_contact() {
    let (_dir, mut api) = setup();
    assert_eq!(
        api.delete_contact("Harry", "Potter").unwrap().message(),
        Some(MSG_DELETED)
    );
    let contacts = api.store().load().unwrap();
    assert!(!contacts.iter().any(|c| c.matches("Harry", "Potter")));
}

#[test]
fn test_delete_nonexistent_contact_leaves_file() {
    let (_dir, mut api) = setup();
    let before = fs::read(api.store().path()).unwrap();
    assert_eq!(
        api.delete_contact("Hermione", "Granger").unwrap().message(),
        Some(MSG_NOT_FOUND)
    );
    assert_eq!(fs::read(api.store().path()).unwrap(), before);
}

#[test]
fn test_search_contact() {
    let (_dir, api) = setup();
    let result = api.search_contacts("John", "Harvard").unwrap();
    assert_eq!(result.listed_contacts.len(), 1);
    assert_eq!(result.listed_contacts[0].phone(), "1234567890");

    let missing = api.search_contacts("Test", "Name").unwrap();
    assert_eq!(missing.message(), Some(MSG_NOT_FOUND));
}

#[test]
fn test_update_contact() {
    let (_dir, mut api) = setup();
    let result = api
        .update_contact("John", "Harvard", &ContactUpdate::new().phone("5555555555"))
        .unwrap();
    assert_eq!(result.message(), Some(MSG_UPDATED));

    let john = api
        .store()
        .load()
        .unwrap()
        .into_iter()
        .find(|c| c.matches("John", "Harvard"))
        .unwrap();
    assert_eq!(john.phone(), "5555555555");
    assert_eq!(john.email(), Some("john.harvard@example.com"));
    assert_eq!(john.address(), "123 Street");
}

#[test]
fn test_list_empty_file() {
    let dir = TempDir::new().unwrap();
    let api = ContactsApi::new(
        CsvStore::new(dir.path().join("missing.csv")),
        dir.path().to_path_buf(),
    );
    assert_eq!(api.list_contacts().unwrap().message(), Some(MSG_EMPTY));
}
