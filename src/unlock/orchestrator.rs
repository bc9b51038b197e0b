//! Per-cell unlock animation: stress, then break.
//!
//! The orchestrator is a small state machine with an explicit transition
//! table. Phase changes are scheduled on a [`Timeline`] and delivered when the
//! host advances the clock. Visual state is never stored per frame; it is
//! sampled in closed form from the phase entry instants by [`UnlockOrchestrator::frame`].

use super::feedback::{FeedbackSink, ImpactIntensity};
use super::shards::{generate_cracks, generate_shards, CrackDescriptor, ShardDescriptor, ShardPose};
use super::timeline::{Millis, Timeline};
use crate::achievements::Rarity;
use crate::constants::{
    BREAK_DURATION_MS, FLASH_FADE_MS, IMPACT_DELAY_MS, SCALE_KEYFRAMES, SOUND_GLASS_BREAK,
    SPRING_DAMPING, SPRING_FREQUENCY_HZ, STRESS_DURATION_MS, TREMOR_AMPLITUDE,
    TREMOR_FREQUENCY_HZ,
};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::grid::{CellState, GridCell};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Stress,
    Break,
}

impl AnimationPhase {
    pub fn name(&self) -> &'static str {
        match self {
            AnimationPhase::Idle => "idle",
            AnimationPhase::Stress => "stress",
            AnimationPhase::Break => "break",
        }
    }
}

/// What can move the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The cell was marked animating while unlocked.
    Start,
    /// The stress duration elapsed.
    StressElapsed,
    /// The animating flag was cleared.
    Cancel,
}

/// Transition table. `None` means the trigger is ignored in that phase.
pub fn next_phase(phase: AnimationPhase, trigger: Trigger) -> Option<AnimationPhase> {
    match (phase, trigger) {
        (AnimationPhase::Idle, Trigger::Start) => Some(AnimationPhase::Stress),
        (AnimationPhase::Stress, Trigger::StressElapsed) => Some(AnimationPhase::Break),
        (AnimationPhase::Stress, Trigger::Cancel) | (AnimationPhase::Break, Trigger::Cancel) => {
            Some(AnimationPhase::Idle)
        }
        _ => None,
    }
}

/// Emitted as the animation progresses.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationEvent {
    PhaseEntered {
        id: String,
        phase: AnimationPhase,
        at: Millis,
    },
    /// Haptic, sound, flash and window reveal all fired at this instant.
    Impact { id: String, at: Millis },
    /// Break phase finished. The orchestrator stays here until cancelled.
    Completed { id: String, at: Millis },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerAction {
    EnterBreak,
    Impact,
    LegendarySuccess,
    Complete,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    generation: u64,
    action: TimerAction,
}

#[derive(Debug, Clone)]
struct AnimationRun {
    achievement_id: String,
    rarity: Rarity,
    cell_size: f64,
    stress_entered_at: Millis,
    break_entered_at: Option<Millis>,
    completed: bool,
    cracks: Vec<CrackDescriptor>,
    shards: Vec<ShardDescriptor>,
}

/// Sampled visual state of the animating cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellFrame {
    pub scale: f64,
    /// 1.0 hides the revealed window, 0.0 shows it.
    pub overlay_opacity: f64,
    pub flash_intensity: f64,
    /// Horizontal tremor offset in units.
    pub tremor_offset: f64,
    /// (crack, opacity)
    pub cracks: Vec<(CrackDescriptor, f64)>,
    pub shards: Vec<ShardPose>,
}

impl CellFrame {
    pub fn at_rest() -> Self {
        Self {
            scale: 1.0,
            overlay_opacity: 0.0,
            flash_intensity: 0.0,
            tremor_offset: 0.0,
            cracks: Vec::new(),
            shards: Vec::new(),
        }
    }
}

/// Scale during the break phase: linear beats, then a damped spring back to 1.
pub fn break_scale_at(elapsed_ms: u64) -> f64 {
    if elapsed_ms >= BREAK_DURATION_MS {
        return 1.0;
    }
    for pair in SCALE_KEYFRAMES.windows(2) {
        let ((t0, s0), (t1, s1)) = (pair[0], pair[1]);
        if elapsed_ms <= t1 {
            let f = (elapsed_ms - t0) as f64 / (t1 - t0) as f64;
            return s0 + (s1 - s0) * f;
        }
    }

    let (hold_end, hold_scale) = SCALE_KEYFRAMES[SCALE_KEYFRAMES.len() - 1];
    let t = (elapsed_ms - hold_end) as f64 / 1000.0;
    1.0 - (1.0 - hold_scale) * (-SPRING_DAMPING * t).exp() * (TAU * SPRING_FREQUENCY_HZ * t).cos()
}

/// Flash brightness relative to the impact instant.
pub fn flash_at(since_impact_ms: u64) -> f64 {
    (1.0 - since_impact_ms as f64 / FLASH_FADE_MS as f64).max(0.0)
}

/// Tremor offset during the stress phase.
pub fn tremor_at(elapsed_ms: u64) -> f64 {
    TREMOR_AMPLITUDE * (TAU * TREMOR_FREQUENCY_HZ * elapsed_ms as f64 / 1000.0).sin()
}

/// Drives the glass-break sequence for one cell at a time.
pub struct UnlockOrchestrator<R = StdRng> {
    rng: R,
    phase: AnimationPhase,
    generation: u64,
    latched_id: Option<String>,
    run: Option<AnimationRun>,
    timeline: Timeline<Timer>,
}

impl UnlockOrchestrator<StdRng> {
    /// Orchestrator with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for UnlockOrchestrator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UnlockOrchestrator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            phase: AnimationPhase::Idle,
            generation: 0,
            latched_id: None,
            run: None,
            timeline: Timeline::new(),
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// True between a successful start and the next cancel.
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.run.as_ref().map(|r| r.completed).unwrap_or(false)
    }

    pub fn animating_id(&self) -> Option<&str> {
        self.run.as_ref().map(|r| r.achievement_id.as_str())
    }

    pub fn shards(&self) -> &[ShardDescriptor] {
        self.run.as_ref().map(|r| r.shards.as_slice()).unwrap_or(&[])
    }

    pub fn cracks(&self) -> &[CrackDescriptor] {
        self.run.as_ref().map(|r| r.cracks.as_slice()).unwrap_or(&[])
    }

    pub fn pending_timers(&self) -> usize {
        self.timeline.len()
    }

    /// Marks `cell` as animating and enters stress if the cell is unlocked.
    ///
    /// Re-observing the start condition for the cell already latched is a
    /// no-op. Starting a different cell cancels the current run first.
    pub fn start(
        &mut self,
        cell: &GridCell,
        cell_size: f64,
        now: Millis,
        diagnostics: &dyn DiagnosticSink,
    ) -> Vec<AnimationEvent> {
        let Some(achievement) = cell.achievement.as_ref() else {
            return Vec::new();
        };
        if cell.state != CellState::Unlocked {
            return Vec::new();
        }

        if self.latched_id.as_deref() == Some(achievement.id.as_str()) {
            diagnostics.report(Diagnostic::ReentrantStart {
                id: achievement.id.clone(),
            });
            return Vec::new();
        }
        if self.is_animating() {
            self.cancel();
        }

        let Some(phase) = next_phase(self.phase, Trigger::Start) else {
            return Vec::new();
        };

        self.phase = phase;
        self.latched_id = Some(achievement.id.clone());
        let cracks = generate_cracks(cell_size, &mut self.rng);
        self.run = Some(AnimationRun {
            achievement_id: achievement.id.clone(),
            rarity: achievement.rarity,
            cell_size,
            stress_entered_at: now,
            break_entered_at: None,
            completed: false,
            cracks,
            shards: Vec::new(),
        });
        self.schedule(now + STRESS_DURATION_MS, TimerAction::EnterBreak);

        vec![AnimationEvent::PhaseEntered {
            id: achievement.id.clone(),
            phase,
            at: now,
        }]
    }

    /// Clears the animating flag. Pending timers are dropped and any that
    /// still reach [`advance`](Self::advance) are ignored.
    pub fn cancel(&mut self) -> bool {
        let was_animating = self.run.is_some();
        self.timeline.clear();
        self.generation += 1;
        self.latched_id = None;
        self.run = None;
        if let Some(phase) = next_phase(self.phase, Trigger::Cancel) {
            self.phase = phase;
        }
        was_animating
    }

    /// Fires every timer due at or before `now`, including ones scheduled by
    /// timers fired in the same call.
    pub fn advance(
        &mut self,
        now: Millis,
        feedback: &mut dyn FeedbackSink,
        diagnostics: &dyn DiagnosticSink,
    ) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        loop {
            let due = self.timeline.drain_due(now);
            if due.is_empty() {
                break;
            }
            for (at, timer) in due {
                if timer.generation != self.generation || self.run.is_none() {
                    diagnostics.report(Diagnostic::StaleTimer {
                        generation: timer.generation,
                        current: self.generation,
                    });
                    continue;
                }
                if let Some(event) = self.fire(timer.action, at, feedback) {
                    events.push(event);
                }
            }
        }
        events
    }

    fn fire(
        &mut self,
        action: TimerAction,
        at: Millis,
        feedback: &mut dyn FeedbackSink,
    ) -> Option<AnimationEvent> {
        match action {
            TimerAction::EnterBreak => {
                let phase = next_phase(self.phase, Trigger::StressElapsed)?;
                self.phase = phase;

                let run = self.run.as_mut()?;
                run.break_entered_at = Some(at);
                run.shards = generate_shards(run.rarity, run.cell_size, &mut self.rng);
                let id = run.achievement_id.clone();
                let legendary = run.rarity == Rarity::Legendary;

                self.schedule(at + IMPACT_DELAY_MS, TimerAction::Impact);
                if legendary {
                    self.schedule(at + BREAK_DURATION_MS, TimerAction::LegendarySuccess);
                }
                self.schedule(at + BREAK_DURATION_MS, TimerAction::Complete);

                Some(AnimationEvent::PhaseEntered { id, phase, at })
            }
            TimerAction::Impact => {
                let run = self.run.as_ref()?;
                feedback.play_impact(ImpactIntensity::Heavy);
                feedback.play(SOUND_GLASS_BREAK);
                Some(AnimationEvent::Impact {
                    id: run.achievement_id.clone(),
                    at,
                })
            }
            TimerAction::LegendarySuccess => {
                feedback.play_success_notification();
                None
            }
            TimerAction::Complete => {
                let run = self.run.as_mut()?;
                run.completed = true;
                Some(AnimationEvent::Completed {
                    id: run.achievement_id.clone(),
                    at,
                })
            }
        }
    }

    fn schedule(&mut self, due: Millis, action: TimerAction) {
        self.timeline.schedule_at(
            due,
            Timer {
                generation: self.generation,
                action,
            },
        );
    }

    /// Visual state of the animating cell at `now`.
    pub fn frame(&self, now: Millis) -> CellFrame {
        let Some(run) = self.run.as_ref() else {
            return CellFrame::at_rest();
        };

        match (self.phase, run.break_entered_at) {
            (AnimationPhase::Break, Some(entered)) => {
                let elapsed = now.saturating_sub(entered);
                if run.completed || elapsed >= BREAK_DURATION_MS {
                    return CellFrame::at_rest();
                }
                let impacted = elapsed >= IMPACT_DELAY_MS;
                CellFrame {
                    scale: break_scale_at(elapsed),
                    overlay_opacity: if impacted { 0.0 } else { 1.0 },
                    flash_intensity: if impacted {
                        flash_at(elapsed - IMPACT_DELAY_MS)
                    } else {
                        0.0
                    },
                    tremor_offset: 0.0,
                    cracks: if impacted {
                        Vec::new()
                    } else {
                        run.cracks.iter().map(|c| (*c, 1.0)).collect()
                    },
                    shards: run.shards.iter().filter_map(|s| s.pose_at(elapsed)).collect(),
                }
            }
            _ => {
                let elapsed = now.saturating_sub(run.stress_entered_at);
                CellFrame {
                    scale: 1.0,
                    overlay_opacity: 1.0,
                    flash_intensity: 0.0,
                    tremor_offset: tremor_at(elapsed),
                    cracks: run
                        .cracks
                        .iter()
                        .map(|c| (*c, c.opacity_at(elapsed)))
                        .collect(),
                    shards: Vec::new(),
                }
            }
        }
    }

    #[cfg(test)]
    fn schedule_stale(&mut self, due: Millis) {
        self.timeline.schedule_at(
            due,
            Timer {
                generation: self.generation.wrapping_sub(1),
                action: TimerAction::Impact,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementDefinition;
    use crate::diagnostics::{NullSink, RecordingSink};
    use crate::unlock::feedback::{FeedbackCall, RecordedFeedback};
    use rand_chacha::ChaCha8Rng;

    fn unlocked_cell(id: &str, rarity: Rarity) -> GridCell {
        GridCell {
            row: 1,
            col: 1,
            state: CellState::Unlocked,
            achievement: Some(AchievementDefinition::new(id, id, "", "*", rarity, 1)),
            progress: None,
            unlocked: None,
        }
    }

    fn orchestrator() -> UnlockOrchestrator<ChaCha8Rng> {
        UnlockOrchestrator::with_rng(ChaCha8Rng::seed_from_u64(42))
    }

    #[test]
    fn test_transition_table() {
        use AnimationPhase::*;
        assert_eq!(next_phase(Idle, Trigger::Start), Some(Stress));
        assert_eq!(next_phase(Stress, Trigger::StressElapsed), Some(Break));
        assert_eq!(next_phase(Break, Trigger::Cancel), Some(Idle));
        assert_eq!(next_phase(Stress, Trigger::Cancel), Some(Idle));
        assert_eq!(next_phase(Idle, Trigger::StressElapsed), None);
        assert_eq!(next_phase(Break, Trigger::Start), None);
        assert_eq!(next_phase(Break, Trigger::StressElapsed), None);
        assert_eq!(next_phase(Idle, Trigger::Cancel), None);
    }

    #[test]
    fn test_start_requires_unlocked_cell() {
        let mut orch = orchestrator();
        let mut cell = unlocked_cell("a", Rarity::Common);
        cell.state = CellState::Visible;
        assert!(orch.start(&cell, 40.0, 0, &NullSink).is_empty());
        assert_eq!(orch.phase(), AnimationPhase::Idle);

        let filler = GridCell::filler(0, 0);
        assert!(orch.start(&filler, 40.0, 0, &NullSink).is_empty());
    }

    #[test]
    fn test_stress_then_break_on_schedule() {
        let mut orch = orchestrator();
        let mut fb = RecordedFeedback::new();
        let events = orch.start(&unlocked_cell("a", Rarity::Common), 40.0, 1000, &NullSink);
        assert_eq!(orch.phase(), AnimationPhase::Stress);
        assert_eq!(
            events,
            vec![AnimationEvent::PhaseEntered {
                id: "a".into(),
                phase: AnimationPhase::Stress,
                at: 1000
            }]
        );

        assert!(orch.advance(1399, &mut fb, &NullSink).is_empty());
        assert_eq!(orch.phase(), AnimationPhase::Stress);

        let events = orch.advance(1400, &mut fb, &NullSink);
        assert_eq!(orch.phase(), AnimationPhase::Break);
        assert!(matches!(
            events[0],
            AnimationEvent::PhaseEntered {
                phase: AnimationPhase::Break,
                at: 1400,
                ..
            }
        ));
        assert_eq!(orch.shards().len(), 8);
        assert!(fb.calls.is_empty());
    }

    #[test]
    fn test_impact_feedback_fires_together_at_100ms() {
        let mut orch = orchestrator();
        let mut fb = RecordedFeedback::new();
        orch.start(&unlocked_cell("a", Rarity::Rare), 40.0, 0, &NullSink);
        orch.advance(400, &mut fb, &NullSink);

        assert!(orch.advance(499, &mut fb, &NullSink).is_empty());
        assert_eq!(orch.frame(499).overlay_opacity, 1.0);

        let events = orch.advance(500, &mut fb, &NullSink);
        assert_eq!(
            events,
            vec![AnimationEvent::Impact {
                id: "a".into(),
                at: 500
            }]
        );
        assert_eq!(
            fb.calls,
            vec![
                FeedbackCall::Impact(ImpactIntensity::Heavy),
                FeedbackCall::Play(SOUND_GLASS_BREAK.to_string()),
            ]
        );
        let frame = orch.frame(500);
        assert_eq!(frame.overlay_opacity, 0.0);
        assert_eq!(frame.flash_intensity, 1.0);
    }

    #[test]
    fn test_completes_at_1100ms_and_stays_in_break() {
        let mut orch = orchestrator();
        let mut fb = RecordedFeedback::new();
        orch.start(&unlocked_cell("a", Rarity::Epic), 40.0, 0, &NullSink);

        let events = orch.advance(5000, &mut fb, &NullSink);
        let completed: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                AnimationEvent::Completed { at, .. } => Some(*at),
                _ => None,
            })
            .collect();
        assert_eq!(completed, vec![1100]);
        assert_eq!(events.len(), 3);
        assert!(orch.is_completed());
        assert_eq!(orch.phase(), AnimationPhase::Break);
        assert_eq!(orch.pending_timers(), 0);
        assert_eq!(fb.success_count(), 0);
        assert_eq!(orch.frame(5000), CellFrame::at_rest());
    }

    #[test]
    fn test_legendary_success_at_end_of_break() {
        let mut orch = orchestrator();
        let mut fb = RecordedFeedback::new();
        orch.start(&unlocked_cell("crown", Rarity::Legendary), 40.0, 0, &NullSink);
        orch.advance(1099, &mut fb, &NullSink);
        assert_eq!(fb.success_count(), 0);
        orch.advance(1100, &mut fb, &NullSink);
        assert_eq!(fb.success_count(), 1);
        assert_eq!(fb.calls.last(), Some(&FeedbackCall::Success));
        assert_eq!(orch.shards().len(), 16);
    }

    #[test]
    fn test_cancel_during_break_silences_impact() {
        let mut orch = orchestrator();
        let mut fb = RecordedFeedback::new();
        orch.start(&unlocked_cell("a", Rarity::Common), 40.0, 0, &NullSink);
        orch.advance(450, &mut fb, &NullSink);
        assert_eq!(orch.phase(), AnimationPhase::Break);

        assert!(orch.cancel());
        assert_eq!(orch.phase(), AnimationPhase::Idle);
        assert_eq!(orch.pending_timers(), 0);

        assert!(orch.advance(2000, &mut fb, &NullSink).is_empty());
        assert!(fb.calls.is_empty());
        assert_eq!(orch.frame(2000), CellFrame::at_rest());
    }

    #[test]
    fn test_stale_timer_is_noop() {
        let mut orch = orchestrator();
        let mut fb = RecordedFeedback::new();
        let sink = RecordingSink::new();
        orch.start(&unlocked_cell("a", Rarity::Common), 40.0, 0, &NullSink);
        orch.schedule_stale(10);

        orch.advance(10, &mut fb, &sink);
        assert!(fb.calls.is_empty());
        assert!(matches!(sink.entries()[0], Diagnostic::StaleTimer { .. }));
    }

    #[test]
    fn test_latch_blocks_duplicate_start() {
        let mut orch = orchestrator();
        let mut fb = RecordedFeedback::new();
        let sink = RecordingSink::new();
        let cell = unlocked_cell("a", Rarity::Common);

        orch.start(&cell, 40.0, 0, &sink);
        orch.advance(200, &mut fb, &sink);
        assert!(orch.start(&cell, 40.0, 200, &sink).is_empty());
        assert_eq!(sink.take(), vec![Diagnostic::ReentrantStart { id: "a".into() }]);

        // Break still lands on the original schedule
        let events = orch.advance(400, &mut fb, &sink);
        assert!(matches!(events[0], AnimationEvent::PhaseEntered { at: 400, .. }));

        // Even after completion, re-observing does not restart
        orch.advance(1100, &mut fb, &sink);
        assert!(orch.start(&cell, 40.0, 1200, &sink).is_empty());
        assert!(orch.is_completed());
    }

    #[test]
    fn test_cancel_releases_latch() {
        let mut orch = orchestrator();
        let cell = unlocked_cell("a", Rarity::Common);
        orch.start(&cell, 40.0, 0, &NullSink);
        orch.cancel();
        let events = orch.start(&cell, 40.0, 500, &NullSink);
        assert_eq!(events.len(), 1);
        assert_eq!(orch.phase(), AnimationPhase::Stress);
    }

    #[test]
    fn test_new_cell_replaces_running_animation() {
        let mut orch = orchestrator();
        let mut fb = RecordedFeedback::new();
        orch.start(&unlocked_cell("a", Rarity::Common), 40.0, 0, &NullSink);
        orch.advance(300, &mut fb, &NullSink);
        orch.start(&unlocked_cell("b", Rarity::Common), 40.0, 300, &NullSink);
        assert_eq!(orch.animating_id(), Some("b"));

        // "a" would have broken at 400; only "b" breaks, at 700
        let events = orch.advance(699, &mut fb, &NullSink);
        assert!(events.is_empty());
        let events = orch.advance(700, &mut fb, &NullSink);
        assert_eq!(
            events,
            vec![AnimationEvent::PhaseEntered {
                id: "b".into(),
                phase: AnimationPhase::Break,
                at: 700
            }]
        );
    }

    #[test]
    fn test_stress_frame_is_opaque_with_fading_cracks() {
        let mut orch = orchestrator();
        orch.start(&unlocked_cell("a", Rarity::Common), 40.0, 0, &NullSink);
        let frame = orch.frame(100);
        assert_eq!(frame.overlay_opacity, 1.0);
        assert_eq!(frame.cracks.len(), 5);
        assert!(frame.cracks[0].1 > 0.0);
        assert_eq!(frame.cracks[4].1, 0.0);
        assert!(frame.tremor_offset.abs() <= TREMOR_AMPLITUDE);
        assert!(frame.shards.is_empty());
    }

    #[test]
    fn test_break_frame_spawns_shards_after_impact() {
        let mut orch = orchestrator();
        let mut fb = RecordedFeedback::new();
        orch.start(&unlocked_cell("a", Rarity::Uncommon), 40.0, 0, &NullSink);
        orch.advance(400, &mut fb, &NullSink);

        assert!(orch.frame(450).shards.is_empty());
        let frame = orch.frame(400 + 200);
        assert!(!frame.shards.is_empty());
        assert!(frame.cracks.is_empty());
        assert!(frame.flash_intensity > 0.0 && frame.flash_intensity < 1.0);
    }

    #[test]
    fn test_scale_beats() {
        assert_eq!(break_scale_at(0), 1.0);
        assert!((break_scale_at(100) - 1.06).abs() < 1e-9);
        assert!((break_scale_at(160) - 1.18).abs() < 1e-9);
        assert!((break_scale_at(240) - 0.92).abs() < 1e-9);
        assert!((break_scale_at(300) - 0.92).abs() < 1e-9);
        assert!((break_scale_at(320) - 0.92).abs() < 1e-9);
        assert!((break_scale_at(699) - 1.0).abs() < 0.02);
        assert_eq!(break_scale_at(700), 1.0);
    }

    #[test]
    fn test_flash_decay() {
        assert_eq!(flash_at(0), 1.0);
        assert!((flash_at(100) - 0.5).abs() < 1e-9);
        assert_eq!(flash_at(200), 0.0);
        assert_eq!(flash_at(1000), 0.0);
    }

    #[test]
    fn test_shards_regenerated_each_run() {
        let mut orch = orchestrator();
        let mut fb = RecordedFeedback::new();
        let cell = unlocked_cell("a", Rarity::Common);
        orch.start(&cell, 40.0, 0, &NullSink);
        orch.advance(400, &mut fb, &NullSink);
        let first = orch.shards().to_vec();

        orch.cancel();
        orch.start(&cell, 40.0, 1000, &NullSink);
        orch.advance(1400, &mut fb, &NullSink);
        assert_ne!(orch.shards(), first.as_slice());
    }
}
