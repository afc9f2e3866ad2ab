//! The command shell overlay.
//!
//! Leaves first:
//!
//! - [`cache`] - snapshot of fetched projects and experience, with refresh sequencing
//! - [`transcript`] - append-only scrollback of input, output and error lines
//! - [`history`] - executed commands and the up/down recall cursor
//! - [`search`] - keyword search over the cache, rendered as one grouped report
//! - [`commands`] - line parsing and the built-in command table
//! - [`session`] - [`ShellSession`], which ties the above together and dispatches commands
//!
//! Nothing in here performs I/O or touches the terminal. Front ends (the TUI, `exec`) own
//! the session, run refresh fetches, and render the transcript.

pub mod cache;
pub mod commands;
pub mod history;
pub mod search;
pub mod session;
pub mod transcript;

pub use cache::{FetchStatus, RecordCache, RefreshOutcome, RefreshTicket};
pub use commands::BuiltIn;
pub use history::{HistoryNavigator, Recall};
pub use search::{SearchReport, search};
pub use session::{Profile, ShellSession, SubmitOutcome, Visibility};
pub use transcript::{LineKind, Transcript, TranscriptLine};
