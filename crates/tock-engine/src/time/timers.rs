use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Scheduling sequence number; breaks ties between equal deadlines.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
struct Seq(u64);

/// One-shot deadline queue.
///
/// Timers never fire on their own; the owner drains them with `take_due`.
/// Payloads due at the same instant come out in scheduling order.
#[derive(Debug)]
pub struct Timers<T> {
    queue: BTreeMap<(Instant, Seq), T>,
    next_seq: u64,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) {
        self.schedule_at(now + delay, payload);
    }

    pub fn schedule_at(&mut self, deadline: Instant, payload: T) {
        let seq = Seq(self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);
        self.queue.insert((deadline, seq), payload);
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Removes and returns every payload whose deadline is at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            if entry.key().0 > now {
                break;
            }
            due.push(entry.remove());
        }
        due
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
