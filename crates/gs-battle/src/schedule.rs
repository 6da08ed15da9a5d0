use std::time::Duration;

/// A task waiting for its due time.
#[derive(Debug, Clone)]
struct Pending<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

/// Single-threaded timer queue driven by a virtual millisecond clock.
///
/// Tasks come out in due order; tasks due at the same instant come out in
/// the order they were scheduled. Nothing runs until the host calls
/// [`Scheduler::pop_due`], so the owner decides when time passes.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at time zero.
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Queue a task to run `after` from now.
    pub fn schedule(&mut self, after: Duration, task: T) {
        let due_ms = self.now_ms.saturating_add(after.as_millis() as u64);
        self.pending.push(Pending {
            due_ms,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }

    /// Remove the earliest task due at or before `until_ms`, moving the clock
    /// to its due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<T> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;
        let pending = self.pending.remove(idx);
        self.now_ms = self.now_ms.max(pending.due_ms);
        Some(pending.task)
    }

    /// Move the clock forward without running anything.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Drop every pending task.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Number of tasks still waiting.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Time until the next task is due, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.due_ms)
            .min()
            .map(|due| Duration::from_millis(due.saturating_sub(self.now_ms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_order() {
        let mut s = Scheduler::new();
        s.schedule(Duration::from_millis(300), "c");
        s.schedule(Duration::from_millis(100), "a");
        s.schedule(Duration::from_millis(200), "b");
        assert_eq!(s.pop_due(1000), Some("a"));
        assert_eq!(s.now_ms(), 100);
        assert_eq!(s.pop_due(1000), Some("b"));
        assert_eq!(s.pop_due(1000), Some("c"));
        assert_eq!(s.pop_due(1000), None);
    }

    #[test]
    fn ties_are_fifo() {
        let mut s = Scheduler::new();
        s.schedule(Duration::ZERO, 1);
        s.schedule(Duration::ZERO, 2);
        assert_eq!(s.pop_due(0), Some(1));
        assert_eq!(s.pop_due(0), Some(2));
    }

    #[test]
    fn not_due_yet() {
        let mut s = Scheduler::new();
        s.schedule(Duration::from_secs(2), ());
        assert_eq!(s.pop_due(1999), None);
        assert_eq!(s.next_due_in(), Some(Duration::from_secs(2)));
        s.settle(1500);
        assert_eq!(s.next_due_in(), Some(Duration::from_millis(500)));
        assert_eq!(s.pop_due(2000), Some(()));
    }

    #[test]
    fn schedule_is_relative_to_clock() {
        let mut s = Scheduler::new();
        s.settle(1000);
        s.schedule(Duration::from_millis(500), 'x');
        assert_eq!(s.pop_due(1499), None);
        assert_eq!(s.pop_due(1500), Some('x'));
    }

    #[test]
    fn cancel_all_drops_everything() {
        let mut s = Scheduler::new();
        s.schedule(Duration::from_millis(10), 1);
        s.schedule(Duration::from_millis(20), 2);
        assert_eq!(s.cancel_all(), 2);
        assert_eq!(s.pending(), 0);
        assert_eq!(s.pop_due(u64::MAX), None);
        assert_eq!(s.next_due_in(), None);
    }
}
