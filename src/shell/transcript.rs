use std::borrow::Cow;

use chrono::{DateTime, Utc};

pub const WELCOME_MESSAGE: &str =
    "Welcome to the portfolio terminal!\nType \"help\" to see available commands.";
pub const CLEARED_MESSAGE: &str = "Terminal cleared.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub id: u64,
    pub kind: LineKind,
    /// May span several lines. Input lines hold the command without its prompt.
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl TranscriptLine {
    /// Text as shown on screen; input lines get the `$ ` prompt
    pub fn display_text(&self) -> Cow<'_, str> {
        match self.kind {
            LineKind::Input => Cow::Owned(format!("$ {}", self.text)),
            LineKind::Output | LineKind::Error => Cow::Borrowed(&self.text),
        }
    }
}

/// Append-only scrollback. Ids increase monotonically for the life of the transcript,
/// including across [`clear`](Transcript::clear).
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
    next_id: u64,
}

impl Transcript {
    /// Transcript holding the welcome banner
    pub fn new() -> Self {
        let mut transcript = Self { lines: Vec::new(), next_id: 1 };
        transcript.append(LineKind::Output, WELCOME_MESSAGE);
        transcript
    }

    pub fn append(&mut self, kind: LineKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.lines.push(TranscriptLine { id, kind, text: text.into(), created_at: Utc::now() });
        id
    }

    /// Replace everything with a single notice line
    pub fn clear(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        self.lines = vec![TranscriptLine {
            id,
            kind: LineKind::Output,
            text: CLEARED_MESSAGE.to_string(),
            created_at: Utc::now(),
        }];
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// Lines appended after the line with id `after`
    pub fn since(&self, after: u64) -> impl Iterator<Item = &TranscriptLine> {
        self.lines.iter().filter(move |line| line.id > after)
    }

    pub fn last(&self) -> Option<&TranscriptLine> {
        self.lines.last()
    }

    pub fn last_id(&self) -> u64 {
        self.next_id - 1
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
