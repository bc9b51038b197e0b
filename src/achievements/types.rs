//! Achievement data types shared by the grid and the unlock presentation.

use serde::{Deserialize, Serialize};

/// Ordinal rarity tier. Controls shard count and celebratory intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    /// All tiers in ascending order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Number of debris shards spawned when a cell of this tier breaks.
    pub fn shard_count(&self) -> usize {
        match self {
            Rarity::Common => 8,
            Rarity::Uncommon => 10,
            Rarity::Rare => 12,
            Rarity::Epic => 14,
            Rarity::Legendary => 16,
        }
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: Rarity,
    pub target: u64,
}

impl AchievementDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        rarity: Rarity,
        target: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            rarity,
            target,
        }
    }
}

/// Progress toward an achievement, owned by the external progress tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AchievementProgress {
    pub current: u64,
    pub target: u64,
}

impl AchievementProgress {
    pub fn new(current: u64, target: u64) -> Self {
        Self { current, target }
    }

    /// Completion percentage, capped at 100.
    pub fn percentage(&self) -> f64 {
        if self.target == 0 {
            return if self.current > 0 { 100.0 } else { 0.0 };
        }
        (self.current as f64 / self.target as f64 * 100.0).min(100.0)
    }
}

/// Record of an unlocked achievement. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedRecord {
    pub achievement_id: String,
    /// Unix seconds.
    pub unlocked_at: i64,
}

impl UnlockedRecord {
    pub fn new(achievement_id: impl Into<String>, unlocked_at: i64) -> Self {
        Self {
            achievement_id: achievement_id.into(),
            unlocked_at,
        }
    }

    /// Record stamped with the current wall-clock time.
    pub fn now(achievement_id: impl Into<String>) -> Self {
        Self::new(achievement_id, chrono::Utc::now().timestamp())
    }
}

/// An id that just transitioned from locked to unlocked, waiting to be presented.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementUnlockEvent {
    pub achievement: AchievementDefinition,
    pub timestamp: i64,
}

impl AchievementUnlockEvent {
    pub fn new(achievement: AchievementDefinition, timestamp: i64) -> Self {
        Self {
            achievement,
            timestamp,
        }
    }

    pub fn id(&self) -> &str {
        &self.achievement.id
    }
}
