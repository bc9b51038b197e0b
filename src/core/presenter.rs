//! Drives pending unlocks through the full presentation, one at a time.
//!
//! Each unlock plays stress and break on its cell, then a celebration of
//! configurable length, then a detail card that stays up until the host
//! dismisses it. Only then does the head leave the queue and the next
//! unlock begin.

use crate::achievements::{AchievementCatalog, AchievementUnlockEvent};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::grid::{AchievementGridState, CellState, UnlockedMap};
use crate::unlock::{
    AnimationEvent, AnimationPhase, CellFrame, FeedbackSink, Millis, PendingUnlockQueue,
    UnlockOrchestrator,
};
use rand::rngs::StdRng;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationStage {
    Idle,
    /// Stress and break are playing on the head's cell.
    Animating,
    Celebrating { until: Millis },
    /// Waiting for [`UnlockPresenter::dismiss_detail`].
    Detail,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    Started { id: String },
    Phase { id: String, phase: AnimationPhase },
    Impact { id: String },
    /// The window is revealed for good; re-resolve the grid.
    RevealCommitted { id: String },
    CelebrationStarted { id: String },
    DetailShown { id: String },
    Finished { id: String },
}

pub struct UnlockPresenter<R = StdRng> {
    queue: PendingUnlockQueue,
    orchestrator: UnlockOrchestrator<R>,
    stage: PresentationStage,
    celebration_ms: Millis,
    /// Head last reported as not yet unlocked in the snapshot.
    waiting_on: Option<String>,
}

impl UnlockPresenter<StdRng> {
    pub fn new(celebration_ms: Millis) -> Self {
        Self::with_orchestrator(UnlockOrchestrator::new(), celebration_ms)
    }
}

impl<R: Rng> UnlockPresenter<R> {
    pub fn with_orchestrator(orchestrator: UnlockOrchestrator<R>, celebration_ms: Millis) -> Self {
        Self {
            queue: PendingUnlockQueue::new(),
            orchestrator,
            stage: PresentationStage::Idle,
            celebration_ms,
            waiting_on: None,
        }
    }

    pub fn stage(&self) -> PresentationStage {
        self.stage
    }

    pub fn queue(&self) -> &PendingUnlockQueue {
        &self.queue
    }

    pub fn orchestrator(&self) -> &UnlockOrchestrator<R> {
        &self.orchestrator
    }

    /// The unlock currently being presented, if any.
    pub fn current(&self) -> Option<&AchievementUnlockEvent> {
        match self.stage {
            PresentationStage::Idle => None,
            _ => self.queue.peek(),
        }
    }

    /// Id of the cell whose animation is running.
    pub fn animating_id(&self) -> Option<&str> {
        self.orchestrator.animating_id()
    }

    pub fn frame(&self, now: Millis) -> CellFrame {
        self.orchestrator.frame(now)
    }

    pub fn enqueue(&mut self, event: AchievementUnlockEvent, diagnostics: &dyn DiagnosticSink) -> bool {
        self.queue.enqueue(event, diagnostics)
    }

    /// Enqueues every id present in `current` but not in `previous`, oldest
    /// unlock first (ties broken by id). Returns how many were accepted.
    pub fn sync_unlocks(
        &mut self,
        previous: &UnlockedMap,
        current: &UnlockedMap,
        catalog: &AchievementCatalog,
        diagnostics: &dyn DiagnosticSink,
    ) -> usize {
        let mut fresh: Vec<_> = current
            .values()
            .filter(|record| !previous.contains_key(&record.achievement_id))
            .collect();
        fresh.sort_by(|a, b| {
            a.unlocked_at
                .cmp(&b.unlocked_at)
                .then_with(|| a.achievement_id.cmp(&b.achievement_id))
        });

        let mut events = Vec::with_capacity(fresh.len());
        for record in fresh {
            match catalog.get(&record.achievement_id) {
                Some(definition) => {
                    events.push(AchievementUnlockEvent::new(
                        definition.clone(),
                        record.unlocked_at,
                    ));
                }
                None => diagnostics.report(Diagnostic::UnknownUnlockedId {
                    id: record.achievement_id.clone(),
                }),
            }
        }
        self.queue.enqueue_all(events, diagnostics)
    }

    /// Advances the presentation to `now`.
    ///
    /// `grid` is the latest resolved snapshot; the head's cell is found
    /// through its id index. A head whose cell is placed but not unlocked in
    /// `grid` waits for a later tick.
    pub fn tick(
        &mut self,
        now: Millis,
        grid: &AchievementGridState,
        cell_size: f64,
        feedback: &mut dyn FeedbackSink,
        diagnostics: &dyn DiagnosticSink,
    ) -> Vec<PresenterEvent> {
        let mut events = Vec::new();

        if self.stage == PresentationStage::Idle {
            self.begin_head(now, grid, cell_size, diagnostics, &mut events);
        }

        if self.stage == PresentationStage::Animating {
            for event in self.orchestrator.advance(now, feedback, diagnostics) {
                match event {
                    AnimationEvent::PhaseEntered { id, phase, .. } => {
                        events.push(PresenterEvent::Phase { id, phase });
                    }
                    AnimationEvent::Impact { id, .. } => {
                        events.push(PresenterEvent::Impact { id });
                    }
                    AnimationEvent::Completed { id, at } => {
                        events.push(PresenterEvent::RevealCommitted { id: id.clone() });
                        self.celebrate(id, at, &mut events);
                    }
                }
            }
        }

        if let PresentationStage::Celebrating { until } = self.stage {
            if now >= until {
                self.stage = PresentationStage::Detail;
                if let Some(head) = self.queue.peek() {
                    events.push(PresenterEvent::DetailShown {
                        id: head.achievement.id.clone(),
                    });
                }
            }
        }

        events
    }

    fn begin_head(
        &mut self,
        now: Millis,
        grid: &AchievementGridState,
        cell_size: f64,
        diagnostics: &dyn DiagnosticSink,
        events: &mut Vec<PresenterEvent>,
    ) {
        let Some(head) = self.queue.peek() else {
            return;
        };
        let id = head.achievement.id.clone();

        match grid.cell_for(&id) {
            Some(cell) if cell.state == CellState::Unlocked => {
                self.waiting_on = None;
                events.push(PresenterEvent::Started { id: id.clone() });
                for event in self.orchestrator.start(cell, cell_size, now, diagnostics) {
                    if let AnimationEvent::PhaseEntered { id, phase, .. } = event {
                        events.push(PresenterEvent::Phase { id, phase });
                    }
                }
                self.stage = PresentationStage::Animating;
            }
            // Snapshot predates the unlock; stay idle until a fresh one arrives.
            Some(_) => {
                if self.waiting_on.as_deref() != Some(id.as_str()) {
                    diagnostics.report(Diagnostic::HeadNotUnlocked { id: id.clone() });
                    self.waiting_on = Some(id);
                }
            }
            // Nothing to break on the mosaic; go straight to the celebration.
            None => {
                self.waiting_on = None;
                events.push(PresenterEvent::Started { id: id.clone() });
                self.celebrate(id, now, events);
            }
        }
    }

    fn celebrate(&mut self, id: String, at: Millis, events: &mut Vec<PresenterEvent>) {
        self.stage = PresentationStage::Celebrating {
            until: at + self.celebration_ms,
        };
        events.push(PresenterEvent::CelebrationStarted { id });
    }

    /// Skips the rest of the running animation and moves to the celebration.
    pub fn skip_animation(&mut self, now: Millis) -> Vec<PresenterEvent> {
        if self.stage != PresentationStage::Animating {
            return Vec::new();
        }
        let id = self.orchestrator.animating_id().map(str::to_string);
        self.orchestrator.cancel();

        let mut events = Vec::new();
        if let Some(id) = id {
            events.push(PresenterEvent::RevealCommitted { id: id.clone() });
            self.celebrate(id, now, &mut events);
        }
        events
    }

    /// Closes the detail card, retiring the head so the next unlock can start.
    pub fn dismiss_detail(&mut self) -> Option<PresenterEvent> {
        if self.stage != PresentationStage::Detail {
            return None;
        }
        self.orchestrator.cancel();
        self.stage = PresentationStage::Idle;
        self.queue
            .dismiss_head()
            .map(|event| PresenterEvent::Finished {
                id: event.achievement.id,
            })
    }
}
