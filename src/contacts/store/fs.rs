use super::DataStore;
use crate::error::Result;
use crate::model::{Contact, ContactRecord, HEADERS};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_FILE: &str = "contacts.csv";

/// Contacts kept in a single CSV file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl Default for CsvStore {
    fn default() -> Self {
        Self::new(DEFAULT_FILE)
    }
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl DataStore for CsvStore {
    fn load(&self) -> Result<Vec<Contact>> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no contacts file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut contacts = Vec::new();
        for row in reader.deserialize::<ContactRecord>() {
            contacts.push(Contact::try_from(row?)?);
        }

        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent()?;

        // Header is written by hand so an empty collection still gets one.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(&self.path)?;
        writer.write_record(HEADERS)?;
        for contact in contacts {
            writer.serialize(ContactRecord::from(contact))?;
        }
        writer.flush()?;

        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }
}
