//! Sound and haptic output consumed by the unlock animation.
//!
//! Playback is fire-and-forget; the core never reads anything back.

/// Strength of a haptic impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactIntensity {
    /// Used for the glass break.
    Heavy,
}

pub trait FeedbackSink {
    fn play(&mut self, effect: &str);
    fn play_impact(&mut self, intensity: ImpactIntensity);
    fn play_success_notification(&mut self);
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentFeedback;

impl FeedbackSink for SilentFeedback {
    fn play(&mut self, _effect: &str) {}
    fn play_impact(&mut self, _intensity: ImpactIntensity) {}
    fn play_success_notification(&mut self) {}
}

/// One recorded feedback call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackCall {
    Play(String),
    Impact(ImpactIntensity),
    Success,
}

/// Records every call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordedFeedback {
    pub calls: Vec<FeedbackCall>,
}

impl RecordedFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn impact_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, FeedbackCall::Impact(_)))
            .count()
    }

    pub fn success_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, FeedbackCall::Success))
            .count()
    }
}

impl FeedbackSink for RecordedFeedback {
    fn play(&mut self, effect: &str) {
        self.calls.push(FeedbackCall::Play(effect.to_string()));
    }

    fn play_impact(&mut self, intensity: ImpactIntensity) {
        self.calls.push(FeedbackCall::Impact(intensity));
    }

    fn play_success_notification(&mut self) {
        self.calls.push(FeedbackCall::Success);
    }
}
