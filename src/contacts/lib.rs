//! # Contacts Architecture
//!
//! Contacts is a small address book library with a CLI client. The library
//! validates contact records and persists them to a CSV file; the CLI is one
//! possible shell around it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, subcommands, grid tables, colored messages    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, search, delete, update, list, config                │
//! │  - One load → mutate → save unit per call                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs, fields/) and Storage (store/)             │
//! │  - Contact with validated fields                            │
//! │  - DataStore trait: CsvStore, InMemoryStore                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation
//!
//! A [`model::Contact`] cannot hold an invalid field. First name must be
//! non-empty, phone must be ten ASCII digits, and email, when given, must look
//! like `local@domain.tld`. The same constructors in [`fields`] run on creation,
//! on load, and on every setter, so a bad row in the file fails the load and a
//! bad update value fails the update.
//!
//! ## Outcomes vs. errors
//!
//! "Contact not found." and "Contact already exists." are normal outcomes,
//! returned as messages inside `Ok(CmdResult)`. Errors are reserved for
//! [`error::ValidationError`] and I/O or parse failures.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Contact`, its row form, and `ContactUpdate`
//! - [`fields`]: Validated field types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod store;
