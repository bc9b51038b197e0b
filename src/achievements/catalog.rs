//! Achievement catalog with grid placements.

use super::types::AchievementDefinition;
use crate::error::GridConfigError;
use std::collections::HashMap;

/// A catalog entry assigned to a grid coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub definition: AchievementDefinition,
}

impl Placement {
    pub fn new(row: usize, col: usize, definition: AchievementDefinition) -> Self {
        Self {
            row,
            col,
            definition,
        }
    }
}

/// Validated set of placements for an N×N grid.
///
/// Every id appears at most once and every coordinate holds at most one
/// achievement. Built once at startup.
#[derive(Debug, Clone)]
pub struct AchievementCatalog {
    grid_size: usize,
    by_position: HashMap<(usize, usize), AchievementDefinition>,
    positions: HashMap<String, (usize, usize)>,
}

impl AchievementCatalog {
    pub fn new(grid_size: usize, placements: Vec<Placement>) -> Result<Self, GridConfigError> {
        if grid_size == 0 {
            return Err(GridConfigError::ZeroGridSize);
        }

        let mut by_position: HashMap<(usize, usize), AchievementDefinition> = HashMap::new();
        let mut positions = HashMap::new();

        for placement in placements {
            let Placement {
                row,
                col,
                definition,
            } = placement;

            if row >= grid_size || col >= grid_size {
                return Err(GridConfigError::PositionOutOfBounds {
                    id: definition.id,
                    row,
                    col,
                    size: grid_size,
                });
            }
            if positions.contains_key(&definition.id) {
                return Err(GridConfigError::DuplicateId { id: definition.id });
            }
            if let Some(existing) = by_position.get(&(row, col)) {
                return Err(GridConfigError::DuplicatePosition {
                    row,
                    col,
                    first: existing.id.clone(),
                    second: definition.id,
                });
            }

            positions.insert(definition.id.clone(), (row, col));
            by_position.insert((row, col), definition);
        }

        Ok(Self {
            grid_size,
            by_position,
            positions,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of placed achievements.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn at(&self, row: usize, col: usize) -> Option<&AchievementDefinition> {
        self.by_position.get(&(row, col))
    }

    pub fn position_of(&self, id: &str) -> Option<(usize, usize)> {
        self.positions.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&AchievementDefinition> {
        self.position_of(id).and_then(|(row, col)| self.at(row, col))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// All placed definitions in row-major order.
    pub fn definitions(&self) -> Vec<&AchievementDefinition> {
        let mut coords: Vec<&(usize, usize)> = self.by_position.keys().collect();
        coords.sort();
        coords
            .into_iter()
            .filter_map(|coord| self.by_position.get(coord))
            .collect()
    }
}
