//! Append-only record of round outcomes for one game session.

mod entry;

pub use entry::{Category, LogEntry};

use std::fmt;

use crate::LINE_SEPARATOR;

/// Sink the rules engine writes one entry into per logged event.
pub trait RoundRecorder {
    /// Returns `false` when the entry was rejected.
    fn record(&mut self, entry: LogEntry) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundLog {
    entries: Vec<LogEntry>,
}

impl RoundLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. A default-category entry is rejected when an entry for
    /// the same round is already present; other categories may repeat.
    pub fn add(&mut self, entry: LogEntry) -> bool {
        if entry.category() == Category::Default
            && self.entries.iter().any(|e| e.round() == entry.round())
        {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the first entry equal to `entry`
    pub fn remove(&mut self, entry: &LogEntry) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the first entry recorded for `round`; `None` matches the first
    /// uncounted entry
    pub fn remove_round(&mut self, round: Option<u32>) -> bool {
        match self.entries.iter().position(|e| e.round() == round) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    /// First entry recorded for `round`; `None` finds the first uncounted entry
    pub fn entry_for_round(&self, round: Option<u32>) -> Option<&LogEntry> {
        self.entries.iter().find(|e| e.round() == round)
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn valid_entries(&self) -> Vec<&LogEntry> {
        self.filtered(true)
    }

    pub fn invalid_entries(&self) -> Vec<&LogEntry> {
        self.filtered(false)
    }

    fn filtered(&self, valid: bool) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.is_valid() == valid).collect()
    }

    /// Valid or invalid entries, one per line
    pub fn render_filtered(&self, valid: bool) -> String {
        join_lines(self.filtered(valid))
    }

    /// All entries, one per line
    pub fn render(&self) -> String {
        join_lines(&self.entries)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

fn join_lines<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> String {
    entries
        .into_iter()
        .map(LogEntry::to_string)
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

impl RoundRecorder for RoundLog {
    fn record(&mut self, entry: LogEntry) -> bool {
        self.add(entry)
    }
}

impl fmt::Display for RoundLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a RoundLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
