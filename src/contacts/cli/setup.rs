use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(version, about = "A small contact book backed by a CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Contacts file to use (defaults to the configured data-file, then contacts.csv)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact
    #[command(alias = "a")]
    Add {
        first: String,
        last: String,
        phone: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        address: String,
    },

    /// Show contacts matching a first and last name
    #[command(alias = "s")]
    Search { first: String, last: String },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { first: String, last: String },

    /// Update a contact; omitted fields keep their value
    #[command(alias = "u")]
    Update {
        first: String,
        last: String,

        #[arg(long)]
        new_first: Option<String>,

        #[arg(long)]
        new_last: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// List all contacts
    #[command(alias = "ls")]
    List,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Run the interactive menu (default)
    Menu,
}
