use crate::commands::{CmdMessage, CmdResult, MSG_EMPTY};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let contacts = store.load()?;
    if contacts.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(MSG_EMPTY)));
    }
    Ok(CmdResult::default().with_listed_contacts(contacts))
}
