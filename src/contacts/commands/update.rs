use crate::commands::{CmdMessage, CmdResult, MSG_NOT_FOUND, MSG_UPDATED};
use crate::error::Result;
use crate::model::ContactUpdate;
use crate::store::DataStore;
use tracing::{debug, info};

/// Applies `update` to the first contact matching `(first, last)`.
///
/// Empty new values keep the current field. An update with nothing to change
/// still rewrites the file and reports success.
pub fn run<S: DataStore>(
    store: &mut S,
    first: &str,
    last: &str,
    update: &ContactUpdate,
) -> Result<CmdResult> {
    let mut contacts = store.load()?;

    let Some(contact) = contacts.iter_mut().find(|c| c.matches(first, last)) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(MSG_NOT_FOUND)));
    };

    if update.is_empty() {
        debug!(first = first, last = last, "update has no new values");
    }
    update.apply(contact)?;
    let updated = contact.clone();
    store.save(&contacts)?;
    info!(first = first, last = last, "contact updated");

    Ok(CmdResult::default()
        .with_affected_contacts(vec![updated])
        .with_message(CmdMessage::success(MSG_UPDATED)))
}
