//! Achievement catalog and unlock records.
//!
//! Definitions are authored elsewhere; this module only validates where they
//! sit on the mosaic and carries the records the grid is resolved from.

pub mod catalog;
pub mod data;
pub mod types;

pub use catalog::{AchievementCatalog, Placement};
pub use data::demo_catalog;
pub use types::{
    AchievementDefinition, AchievementProgress, AchievementUnlockEvent, Rarity, UnlockedRecord,
};
