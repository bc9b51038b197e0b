//! Pending unlock events, presented strictly one at a time.

use crate::achievements::AchievementUnlockEvent;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use std::collections::{HashSet, VecDeque};

/// FIFO of unlock events awaiting presentation.
///
/// The head is the event currently being presented. It leaves the queue only
/// through [`dismiss_head`](Self::dismiss_head), once its presentation is over.
/// An id is accepted at most once per session.
#[derive(Debug, Clone, Default)]
pub struct PendingUnlockQueue {
    pending: VecDeque<AchievementUnlockEvent>,
    seen: HashSet<String>,
}

impl PendingUnlockQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event. Returns false if the id is already queued or was
    /// presented earlier in the session.
    pub fn enqueue(&mut self, event: AchievementUnlockEvent, diagnostics: &dyn DiagnosticSink) -> bool {
        if !self.seen.insert(event.achievement.id.clone()) {
            diagnostics.report(Diagnostic::DuplicateEnqueue {
                id: event.achievement.id.clone(),
            });
            return false;
        }
        self.pending.push_back(event);
        true
    }

    /// Appends a batch in order, skipping duplicates. Returns how many were accepted.
    pub fn enqueue_all(
        &mut self,
        events: impl IntoIterator<Item = AchievementUnlockEvent>,
        diagnostics: &dyn DiagnosticSink,
    ) -> usize {
        let mut accepted = 0;
        for event in events {
            if self.enqueue(event, diagnostics) {
                accepted += 1;
            }
        }
        accepted
    }

    pub fn peek(&self) -> Option<&AchievementUnlockEvent> {
        self.pending.front()
    }

    /// Removes the head after its presentation has finished.
    pub fn dismiss_head(&mut self) -> Option<AchievementUnlockEvent> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.pending.iter().map(|e| e.id()).collect()
    }
}
