//! Delayed actions driven by the host animation clock.
//!
//! Nothing here blocks: callers schedule an action for a future instant and
//! later hand the current time to [`Timeline::drain_due`], which returns every
//! action whose instant has passed. Actions due at the same instant come out
//! in the order they were scheduled.

/// Host clock reading in milliseconds.
pub type Millis = u64;

#[derive(Debug, Clone)]
struct Scheduled<A> {
    /// Scheduling order, breaks ties between equal instants.
    seq: u64,
    due: Millis,
    action: A,
}

#[derive(Debug, Clone)]
pub struct Timeline<A> {
    next_seq: u64,
    pending: Vec<Scheduled<A>>,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self {
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn schedule_at(&mut self, due: Millis, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { seq, due, action });
    }

    /// Drops every pending action.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every action due at or before `now`, ordered by
    /// due time and then by scheduling order.
    pub fn drain_due(&mut self, now: Millis) -> Vec<(Millis, A)> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|s| s.due <= now);
        self.pending = rest;
        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| (s.due, s.action)).collect()
    }
}
