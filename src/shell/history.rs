use std::collections::VecDeque;

/// Result of moving toward newer history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Show this entry in the input
    Entry(&'a str),
    /// Left history navigation; the input should be emptied
    Cleared,
    /// Not navigating; leave the input alone
    Unchanged,
}

/// Previously executed commands plus an up/down recall cursor.
///
/// The cursor counts back from the newest entry: `Some(0)` is the most recent command,
/// `None` means "not navigating". It always stays within `0..len`.
#[derive(Debug, Clone)]
pub struct HistoryNavigator {
    entries: VecDeque<String>,
    cursor: Option<usize>,
    limit: usize,
}

impl HistoryNavigator {
    pub fn new(limit: usize) -> Self {
        Self { entries: VecDeque::new(), cursor: None, limit: limit.max(1) }
    }

    /// Record an executed command. Blank input is ignored. Resets the cursor.
    pub fn record(&mut self, command: &str) -> bool {
        let command = command.trim();
        if command.is_empty() {
            return false;
        }
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(command.to_string());
        self.cursor = None;
        true
    }

    /// Step toward older entries. `None` at the oldest entry or with empty history.
    pub fn older(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let next = match self.cursor {
            None => 0,
            Some(cursor) if cursor < last => cursor + 1,
            Some(_) => return None,
        };
        self.cursor = Some(next);
        self.entries.get(last - next).map(String::as_str)
    }

    /// Step toward newer entries, leaving navigation after the newest one
    pub fn newer(&mut self) -> Recall<'_> {
        match self.cursor {
            None => Recall::Unchanged,
            Some(0) => {
                self.cursor = None;
                Recall::Cleared
            }
            Some(cursor) => {
                let next = cursor - 1;
                self.cursor = Some(next);
                let index = self.entries.len() - 1 - next;
                self.entries.get(index).map_or(Recall::Unchanged, |e| Recall::Entry(e))
            }
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Oldest first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(100)
    }
}
