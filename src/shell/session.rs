//! The shell session and its command dispatcher.
//!
//! A [`ShellSession`] is created once by the front end and owns everything the overlay
//! shows: transcript, history, record cache, input buffer and the open/closed flag. All
//! state changes go through its transition methods:
//!
//! - [`open`](ShellSession::open) / [`close`](ShellSession::close)
//! - [`submit`](ShellSession::submit) / [`submit_input`](ShellSession::submit_input)
//! - [`history_up`](ShellSession::history_up) / [`history_down`](ShellSession::history_down)
//! - [`apply_refresh`](ShellSession::apply_refresh) when a fetch started by `open` finishes
//!
//! Opening is the only thing that starts a refresh. The session never does I/O itself; it
//! hands out a [`RefreshTicket`] and the caller runs the fetch and reports back.

use tracing::debug;

use super::cache::{RecordCache, RefreshOutcome, RefreshTicket};
use super::commands::{
    BuiltIn, DEFAULT_ABOUT, DEFAULT_SKILLS, ParsedLine, find_usage, help_text, parse_line,
    unknown_command,
};
use super::history::{HistoryNavigator, Recall};
use super::search::search;
use super::transcript::{LineKind, Transcript};
use crate::api::{FetchError, FetchedRecords};
use crate::config::ShellConfig;

/// Longest input line the buffer accepts, in characters
const MAX_INPUT_CHARS: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Open,
}

/// What a submitted line did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank line, or the shell is closed
    Ignored,
    Executed(BuiltIn),
    UnknownCommand,
}

/// Static text blocks shown by `about` and `skills`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub about: String,
    pub skills: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self { about: DEFAULT_ABOUT.to_string(), skills: DEFAULT_SKILLS.to_string() }
    }
}

impl From<&ShellConfig> for Profile {
    fn from(config: &ShellConfig) -> Self {
        let defaults = Profile::default();
        Self {
            about: config.about.clone().unwrap_or(defaults.about),
            skills: config.skills.clone().unwrap_or(defaults.skills),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShellSession {
    transcript: Transcript,
    history: HistoryNavigator,
    cache: RecordCache,
    visibility: Visibility,
    input: String,
    profile: Profile,
}

impl ShellSession {
    pub fn new(config: &ShellConfig) -> Self {
        Self::with_cache(config, RecordCache::new())
    }

    pub fn with_cache(config: &ShellConfig, cache: RecordCache) -> Self {
        Self {
            transcript: Transcript::new(),
            history: HistoryNavigator::new(config.history_limit),
            cache,
            visibility: Visibility::Closed,
            input: String::new(),
            profile: Profile::from(config),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Open the overlay. Returns a refresh ticket on the closed→open transition; opening an
    /// open shell does nothing.
    pub fn open(&mut self) -> Option<RefreshTicket> {
        if self.is_open() {
            return None;
        }
        self.visibility = Visibility::Open;
        Some(self.cache.begin_refresh())
    }

    pub fn close(&mut self) {
        self.visibility = Visibility::Closed;
    }

    /// Hand a finished fetch back to the record cache
    pub fn apply_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<FetchedRecords, FetchError>,
    ) -> RefreshOutcome {
        self.cache.complete_refresh(ticket, result)
    }

    /// Run whatever is in the input buffer, emptying it
    pub fn submit_input(&mut self) -> SubmitOutcome {
        let line = std::mem::take(&mut self.input);
        self.submit(&line)
    }

    /// Execute one line: echo it, record it in history, dispatch it
    pub fn submit(&mut self, line: &str) -> SubmitOutcome {
        if !self.is_open() {
            return SubmitOutcome::Ignored;
        }
        let trimmed = line.trim();
        let Some(parsed) = parse_line(trimmed) else {
            return SubmitOutcome::Ignored;
        };

        self.transcript.append(LineKind::Input, trimmed);
        self.history.record(trimmed);
        self.dispatch(parsed)
    }

    fn dispatch(&mut self, parsed: ParsedLine<'_>) -> SubmitOutcome {
        let Some(builtin) = BuiltIn::lookup(parsed.token) else {
            debug!(token = parsed.token, "unknown command");
            self.transcript.append(LineKind::Error, unknown_command(parsed.token));
            return SubmitOutcome::UnknownCommand;
        };
        debug!(command = builtin.name(), args = %parsed.args, "dispatching command");

        match builtin {
            BuiltIn::Help => {
                self.transcript.append(LineKind::Output, help_text());
            }
            BuiltIn::Find => {
                if parsed.args.is_empty() {
                    self.transcript.append(LineKind::Error, find_usage());
                } else {
                    let report = search(&self.cache, &parsed.args);
                    debug!(keyword = %parsed.args, matches = report.total(), "search finished");
                    let rendered = report.render();
                    self.transcript.append(LineKind::Output, rendered);
                }
            }
            BuiltIn::Clear => self.transcript.clear(),
            BuiltIn::Exit => self.close(),
            BuiltIn::Ls => {
                let text = self.project_listing();
                self.transcript.append(LineKind::Output, text);
            }
            BuiltIn::Exp => {
                let text = self.experience_listing();
                self.transcript.append(LineKind::Output, text);
            }
            BuiltIn::About => {
                self.transcript.append(LineKind::Output, self.profile.about.clone());
            }
            BuiltIn::Skills => {
                self.transcript.append(LineKind::Output, self.profile.skills.clone());
            }
        }

        SubmitOutcome::Executed(builtin)
    }

    fn project_listing(&self) -> String {
        if self.cache.project_count() == 0 {
            return "No projects found.".to_string();
        }
        let bullets: Vec<String> = self
            .cache
            .projects()
            .map(|p| format!("• {} ({})", p.title, p.technology_list()))
            .collect();
        format!("Projects:\n{}", bullets.join("\n"))
    }

    fn experience_listing(&self) -> String {
        if self.cache.experience_count() == 0 {
            return "No experience found.".to_string();
        }
        let bullets: Vec<String> = self
            .cache
            .experiences()
            .map(|e| format!("• {} at {} ({})", e.title, e.company, e.category))
            .collect();
        format!("Experience:\n{}", bullets.join("\n"))
    }

    /// Recall an older command into the input
    pub fn history_up(&mut self) {
        if let Some(entry) = self.history.older() {
            self.input = entry.to_string();
        }
    }

    /// Recall a newer command, or empty the input after the newest
    pub fn history_down(&mut self) {
        match self.history.newer() {
            Recall::Entry(entry) => self.input = entry.to_string(),
            Recall::Cleared => self.input.clear(),
            Recall::Unchanged => {}
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() && self.input.chars().count() < MAX_INPUT_CHARS {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn history(&self) -> &HistoryNavigator {
        &self.history
    }

    pub fn cache(&self) -> &RecordCache {
        &self.cache
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}
