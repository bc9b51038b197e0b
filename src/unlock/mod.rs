//! The glass-break unlock sequence.
//!
//! [`PendingUnlockQueue`] holds unlock events until their turn, and
//! [`UnlockOrchestrator`] plays stress and break for one cell at a time.

pub mod feedback;
pub mod orchestrator;
pub mod queue;
pub mod shards;
pub mod timeline;

pub use feedback::{FeedbackSink, ImpactIntensity, RecordedFeedback, SilentFeedback};
pub use orchestrator::{AnimationEvent, AnimationPhase, CellFrame, UnlockOrchestrator};
pub use queue::PendingUnlockQueue;
pub use shards::{generate_cracks, generate_shards, CrackDescriptor, ShardDescriptor, ShardPose};
pub use timeline::{Millis, Timeline};
