//! Resolved mosaic state.

use crate::achievements::{AchievementDefinition, AchievementProgress, UnlockedRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// Opaque and unlabelled.
    Locked,
    /// Opaque but showing its achievement, because a neighbor is unlocked.
    Visible,
    /// Transparent window onto the background.
    Unlocked,
}

impl CellState {
    /// Locked and visible cells both read as opaque against the backdrop.
    pub fn is_hidden(&self) -> bool {
        !matches!(self, CellState::Unlocked)
    }
}

/// One square of the mosaic.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub state: CellState,
    pub achievement: Option<AchievementDefinition>,
    /// Only set when the cell is visible or unlocked.
    pub progress: Option<AchievementProgress>,
    /// Set iff `state == Unlocked`.
    pub unlocked: Option<UnlockedRecord>,
}

impl GridCell {
    /// Permanently locked cell with no achievement.
    pub fn filler(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            state: CellState::Locked,
            achievement: None,
            progress: None,
            unlocked: None,
        }
    }

    pub fn achievement_id(&self) -> Option<&str> {
        self.achievement.as_ref().map(|a| a.id.as_str())
    }

    pub fn is_filler(&self) -> bool {
        self.achievement.is_none()
    }
}

/// Immutable N×N snapshot produced by a single resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementGridState {
    size: usize,
    cells: Vec<Vec<GridCell>>,
    index: HashMap<String, (usize, usize)>,
    unlocked_count: usize,
    total_count: usize,
}

impl AchievementGridState {
    /// Assembles a snapshot from fully resolved rows.
    pub(crate) fn from_rows(size: usize, cells: Vec<Vec<GridCell>>) -> Self {
        let mut index = HashMap::new();
        let mut unlocked_count = 0;
        let mut total_count = 0;

        for cell in cells.iter().flatten() {
            if let Some(id) = cell.achievement_id() {
                index.insert(id.to_string(), (cell.row, cell.col));
                total_count += 1;
            }
            if cell.state == CellState::Unlocked {
                unlocked_count += 1;
            }
        }

        Self {
            size,
            cells,
            index,
            unlocked_count,
            total_count,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// State of a cell, or `None` outside the grid.
    pub fn state_at(&self, row: usize, col: usize) -> Option<CellState> {
        self.cell(row, col).map(|c| c.state)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.iter().map(|r| r.as_slice())
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().flatten()
    }

    /// Grid coordinate of an achievement id.
    pub fn position_of(&self, id: &str) -> Option<(usize, usize)> {
        self.index.get(id).copied()
    }

    pub fn cell_for(&self, id: &str) -> Option<&GridCell> {
        self.position_of(id)
            .and_then(|(row, col)| self.cell(row, col))
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked_count
    }

    /// Number of placed achievements.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn visible_count(&self) -> usize {
        self.cells()
            .filter(|c| c.state == CellState::Visible)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.unlocked_count == self.total_count
    }

    /// Unlocked share of placed achievements (0.0 - 100.0).
    pub fn completion_percentage(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.unlocked_count as f64 / self.total_count as f64 * 100.0
    }
}
