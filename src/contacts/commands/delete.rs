use crate::commands::{CmdMessage, CmdResult, MSG_DELETED, MSG_NOT_FOUND};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

/// Removes the first contact matching `(first, last)`. Saves only on a match.
pub fn run<S: DataStore>(store: &mut S, first: &str, last: &str) -> Result<CmdResult> {
    let mut contacts = store.load()?;

    let Some(pos) = contacts.iter().position(|c| c.matches(first, last)) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(MSG_NOT_FOUND)));
    };

    let removed = contacts.remove(pos);
    store.save(&contacts)?;
    info!(first = first, last = last, "contact deleted");

    Ok(CmdResult::default()
        .with_affected_contacts(vec![removed])
        .with_message(CmdMessage::success(MSG_DELETED)))
}
