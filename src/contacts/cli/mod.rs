//! # CLI Layer
//!
//! One possible UI client for the contacts library. This is the only place
//! that parses arguments, reads stdin, writes to stdout/stderr, or picks an
//! exit code.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup, logging, and per-subcommand handlers
//! - `menu`: the interactive numbered menu (default when no subcommand is given)
//! - `print`: grid tables and colored messages

mod commands;
mod menu;
mod print;
mod setup;

pub use commands::run;
