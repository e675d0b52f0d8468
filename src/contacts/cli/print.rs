use colored::Colorize;
use contacts::api::{CmdMessage, MessageLevel};
use contacts::model::Contact;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub(super) const CONTACT_HEADERS: [&str; 5] =
    ["First Name", "Last Name", "Phone", "Email", "Address"];

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_contacts<W: Write>(out: &mut W, contacts: &[Contact]) -> io::Result<()> {
    if contacts.is_empty() {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = contacts.iter().map(contact_row).collect();
    write!(out, "{}", render_grid(&CONTACT_HEADERS, &rows))
}

fn contact_row(c: &Contact) -> Vec<String> {
    vec![
        c.first().to_string(),
        c.last().to_string(),
        c.phone().to_string(),
        c.email().unwrap_or_default().to_string(),
        c.address().to_string(),
    ]
}

/// Renders a bordered table:
///
/// ```text
/// +--------+-------------+
/// | Option | Action      |
/// +========+=============+
/// | 1      | Add Contact |
/// +--------+-------------+
/// ```
pub(super) fn render_grid<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = grid_rule(&widths, '-');
    out.push_str(&grid_line(&widths, headers.iter().map(|h| h.as_ref())));
    out.push_str(&grid_rule(&widths, '='));
    for row in rows {
        out.push_str(&grid_line(&widths, row.iter().map(String::as_str)));
        out.push_str(&grid_rule(&widths, '-'));
    }
    out
}

fn grid_rule(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&fill.to_string().repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn grid_line<'a>(widths: &[usize], mut cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for w in widths {
        let cell = cells.next().unwrap_or("");
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(w.saturating_sub(cell.width()) + 1));
        line.push('|');
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_pads_columns_to_widest_cell() {
        let rows = vec![
            vec!["1".to_string(), "Add Contact".to_string()],
            vec!["6".to_string(), "Exit".to_string()],
        ];
        let grid = render_grid(&["Option", "Action"], &rows);
        let expected = "\
+--------+-------------+
| Option | Action      |
+========+=============+
| 1      | Add Contact |
+--------+-------------+
| 6      | Exit        |
+--------+-------------+
";
        assert_eq!(grid, expected);
    }

    #[test]
    fn grid_uses_display_width() {
        let rows = vec![vec!["日本".to_string()]];
        let grid = render_grid(&["N"], &rows);
        assert!(grid.starts_with("+------+\n| N    |\n"));
        assert!(grid.contains("| 日本 |"));
    }

    #[test]
    fn contacts_table_has_fixed_headers() {
        let contact = Contact::new("John", "Harvard", "1234567890", "", "123 Street").unwrap();
        let mut out = Vec::new();
        print_contacts(&mut out, &[contact]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("| First Name | Last Name | Phone      | Email | Address    |"));
        assert!(text.contains("| John       | Harvard   | 1234567890 |       | 123 Street |"));
    }

    #[test]
    fn empty_contact_list_prints_nothing() {
        let mut out = Vec::new();
        print_contacts(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
