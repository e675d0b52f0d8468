use super::print::{print_contacts, print_messages, render_grid};
use colored::Colorize;
use contacts::api::{CmdResult, ContactsApi};
use contacts::error::Result;
use contacts::model::ContactUpdate;
use contacts::store::DataStore;
use std::io::{BufRead, Write};
use tracing::warn;

const MENU: [(&str, &str); 6] = [
    ("1", "Add Contact"),
    ("2", "Search Contact"),
    ("3", "Delete Contact"),
    ("4", "Update Contact"),
    ("5", "List Contacts"),
    ("6", "Exit"),
];

const KEEP: &str = "(leave blank to keep current value)";

/// Runs the numbered menu until the user picks Exit or input ends.
///
/// Operation errors are printed as `Error: <message>` and the loop goes on.
/// Only failures to write to `out` end the loop early.
pub(super) fn run<S, R, W>(api: &mut ContactsApi<S>, input: R, out: W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut menu = Menu { input, out };
    let rows: Vec<Vec<String>> = MENU
        .iter()
        .map(|(opt, action)| vec![opt.to_string(), action.to_string()])
        .collect();
    let table = render_grid(&["Option", "Action"], &rows);

    loop {
        write!(menu.out, "\n{}", table)?;
        let Some(choice) = menu.prompt("Enter your choice: ")? else {
            break;
        };
        writeln!(menu.out)?;

        let outcome = match choice.trim() {
            "1" => menu.add(api),
            "2" => menu.search(api),
            "3" => menu.delete(api),
            "4" => menu.update(api),
            "5" => api.list_contacts(),
            "6" => break,
            _ => {
                writeln!(menu.out, "Invalid input.")?;
                continue;
            }
        };

        match outcome {
            Ok(result) => menu.show(&result)?,
            Err(e) => {
                warn!(error = %e, "operation failed");
                writeln!(menu.out, "{}", format!("Error: {}", e).red())?;
            }
        }
    }

    writeln!(menu.out, "Goodbye!")?;
    menu.out.flush()?;
    Ok(())
}

struct Menu<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// A field prompt; end of input reads as an empty answer.
    fn field(&mut self, label: &str) -> Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    fn add<S: DataStore>(&mut self, api: &mut ContactsApi<S>) -> Result<CmdResult> {
        let first = self.field("First Name: ")?;
        let last = self.field("Last Name: ")?;
        let phone = self.field("Phone: ")?;
        let email = self.field("Email (optional): ")?;
        let address = self.field("Address (optional): ")?;
        api.add_contact(&first, &last, &phone, &email, &address)
    }

    fn search<S: DataStore>(&mut self, api: &ContactsApi<S>) -> Result<CmdResult> {
        let first = self.field("First Name of the contact to search: ")?;
        let last = self.field("Last Name of the contact to search: ")?;
        api.search_contacts(&first, &last)
    }

    fn delete<S: DataStore>(&mut self, api: &mut ContactsApi<S>) -> Result<CmdResult> {
        let first = self.field("First Name of the contact to delete: ")?;
        let last = self.field("Last Name of the contact to delete: ")?;
        api.delete_contact(&first, &last)
    }

    fn update<S: DataStore>(&mut self, api: &mut ContactsApi<S>) -> Result<CmdResult> {
        let first = self.field("First Name of the contact to update: ")?;
        let last = self.field("Last Name of the contact to update: ")?;
        let update = ContactUpdate {
            first: Some(self.field(&format!("New First Name {}: ", KEEP))?),
            last: Some(self.field(&format!("New Last Name {}: ", KEEP))?),
            phone: Some(self.field(&format!("New Phone {}: ", KEEP))?),
            email: Some(self.field(&format!("New Email {}: ", KEEP))?),
            address: Some(self.field(&format!("New Address {}: ", KEEP))?),
        };
        api.update_contact(&first, &last, &update)
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        print_contacts(&mut self.out, &result.listed_contacts)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(())
    }
}
