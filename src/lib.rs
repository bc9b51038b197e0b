//! Mosaic - achievement mosaic grid with a glass-break unlock sequence.
//!
//! This module exposes the grid, unlock and presentation logic for testing
//! and for hosts other than the bundled terminal preview.

pub mod achievements;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod unlock;

pub use achievements::{
    AchievementCatalog, AchievementDefinition, AchievementProgress, AchievementUnlockEvent,
    Placement, Rarity, UnlockedRecord,
};
pub use config::MosaicConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, NullSink, RecordingSink};
pub use error::{ConfigError, GridConfigError};
pub use grid::{AchievementGridState, CellState, CornerFlags, GridLayoutEngine};
pub use unlock::{FeedbackSink, PendingUnlockQueue, UnlockOrchestrator};

// UI module is not exposed as it's tightly coupled to the terminal
