use crate::commands::{CmdMessage, CmdResult, MSG_NOT_FOUND};
use crate::error::Result;
use crate::store::DataStore;

/// All contacts matching `(first, last)` exactly, in stored order.
pub fn run<S: DataStore>(store: &S, first: &str, last: &str) -> Result<CmdResult> {
    let matches: Vec<_> = store
        .load()?
        .into_iter()
        .filter(|c| c.matches(first, last))
        .collect();

    if matches.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(MSG_NOT_FOUND)));
    }

    Ok(CmdResult::default().with_listed_contacts(matches))
}
