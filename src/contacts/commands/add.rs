use crate::commands::{CmdMessage, CmdResult, MSG_ADDED, MSG_EXISTS};
use crate::error::Result;
use crate::model::Contact;
use crate::store::DataStore;
use tracing::info;

/// Appends a new contact unless one with the same `(first, last)` exists.
///
/// The duplicate check runs before validation, so re-adding an existing name
/// reports "already exists" whatever the other fields hold.
pub fn run<S: DataStore>(
    store: &mut S,
    first: &str,
    last: &str,
    phone: &str,
    email: &str,
    address: &str,
) -> Result<CmdResult> {
    let mut contacts = store.load()?;

    if contacts.iter().any(|c| c.matches(first, last)) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(MSG_EXISTS)));
    }

    let contact = Contact::new(first, last, phone, email, address)?;
    contacts.push(contact.clone());
    store.save(&contacts)?;
    info!(first = first, last = last, "contact added");

    Ok(CmdResult::default()
        .with_affected_contacts(vec![contact])
        .with_message(CmdMessage::success(MSG_ADDED)))
}
