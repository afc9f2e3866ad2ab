//! Portfolio Shell - a terminal command shell over a portfolio's records
//!
//! The shell reads two collections from a record API, projects and experience entries,
//! and lets a visitor browse them with a handful of built-in commands:
//!
//! - `ls` / `exp` list projects and experience
//! - `find <keyword>` searches both collections case-insensitively
//! - `about`, `skills`, `help`, `clear`, `exit`
//!
//! Everything the overlay shows lives in a [`ShellSession`], which never performs I/O
//! itself. The TUI front end and the one-shot `exec` subcommand both drive it.
//!
//! # Example
//!
//! ```
//! use portfolio_shell::config::ShellConfig;
//! use portfolio_shell::ShellSession;
//!
//! let mut session = ShellSession::new(&ShellConfig::default());
//! session.open();
//! session.submit("help");
//! assert!(session.transcript().last().unwrap().text.starts_with("Available commands:"));
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod shell;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use api::{FetchError, FetchedRecords, HttpRecordSource, RecordSource, fetch_all};
pub use config::Config;
pub use models::{Experience, ExperienceCategory, Project};
pub use shell::{RecordCache, ShellSession, Transcript};
