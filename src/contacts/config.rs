use crate::error::{ContactsError, Result};
use crate::store::fs::DEFAULT_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_DATA_FILE: &str = "data-file";

/// User configuration, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactsConfig {
    /// CSV file used when no `--file` is given.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE)
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl ContactsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ContactsConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DATA_FILE => Some(self.data_file.display().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_DATA_FILE => {
                if value.is_empty() {
                    return Err(ContactsError::Config("data-file cannot be empty".into()));
                }
                self.data_file = PathBuf::from(value);
                Ok(())
            }
            other => Err(ContactsError::Config(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }
}
