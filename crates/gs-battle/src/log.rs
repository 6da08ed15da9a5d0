//! The on-screen battle log.

use std::collections::VecDeque;

/// Number of lines the battle log keeps.
pub const LOG_CAPACITY: usize = 5;

/// Most recent battle messages, newest first.
///
/// Purely observational. Older lines fall off once the capacity is reached;
/// [`BattleLog::total`] keeps counting so observers can tell how many lines
/// arrived since they last looked.
#[derive(Debug, Clone)]
pub struct BattleLog {
    entries: VecDeque<String>,
    capacity: usize,
    total: u64,
}

impl Default for BattleLog {
    fn default() -> Self {
        Self::new(LOG_CAPACITY)
    }
}

impl BattleLog {
    /// Create an empty log with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            total: 0,
        }
    }

    /// Add a line at the front, dropping the oldest past capacity.
    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(target: "gs_battle::log", "{line}");
        self.entries.push_front(line);
        self.entries.truncate(self.capacity);
        self.total += 1;
    }

    /// Lines, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The newest line.
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Lines pushed after the first `seen` ones, oldest first.
    ///
    /// Only lines still held by the log can be returned.
    pub fn since(&self, seen: u64) -> Vec<&str> {
        let fresh = self.total.saturating_sub(seen).min(self.entries.len() as u64) as usize;
        self.entries.iter().take(fresh).rev().map(String::as_str).collect()
    }

    /// How many lines have ever been pushed.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of lines currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_and_capped() {
        let mut log = BattleLog::default();
        for i in 0..8 {
            log.push(format!("line {i}"));
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log.latest(), Some("line 7"));
        let lines: Vec<&str> = log.entries().collect();
        assert_eq!(lines, vec!["line 7", "line 6", "line 5", "line 4", "line 3"]);
        assert_eq!(log.total(), 8);
    }

    #[test]
    fn since_returns_fresh_lines_in_order() {
        let mut log = BattleLog::default();
        log.push("a");
        log.push("b");
        let seen = log.total();
        log.push("c");
        log.push("d");
        assert_eq!(log.since(seen), vec!["c", "d"]);
        assert!(log.since(log.total()).is_empty());
    }

    #[test]
    fn since_is_bounded_by_capacity() {
        let mut log = BattleLog::new(2);
        for s in ["a", "b", "c", "d"] {
            log.push(s);
        }
        assert_eq!(log.since(0), vec!["c", "d"]);
    }

    #[test]
    fn empty_log() {
        let log = BattleLog::default();
        assert!(log.is_empty());
        assert_eq!(log.latest(), None);
        assert!(log.since(0).is_empty());
    }
}
