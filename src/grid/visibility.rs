//! Fog-of-war reveal: turns the unlocked set into per-cell states.
//!
//! A cell is visible when any of its four orthogonal neighbors is unlocked.
//! Visibility is not transitive, so a single pass per cell suffices. The
//! whole grid is rebuilt on every call; nothing is carried between calls.

use super::types::{AchievementGridState, CellState, GridCell};
use crate::achievements::{AchievementCatalog, AchievementProgress, UnlockedRecord};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use std::collections::HashMap;

/// Unlocked records keyed by achievement id.
pub type UnlockedMap = HashMap<String, UnlockedRecord>;

/// Progress keyed by achievement id.
pub type ProgressMap = HashMap<String, AchievementProgress>;

/// Orthogonal in-bounds neighbors of a cell (up, down, left, right).
pub fn orthogonal_neighbors(row: usize, col: usize, size: usize) -> Vec<(usize, usize)> {
    let mut neighbors = Vec::with_capacity(4);
    if row > 0 {
        neighbors.push((row - 1, col));
    }
    if row + 1 < size {
        neighbors.push((row + 1, col));
    }
    if col > 0 {
        neighbors.push((row, col - 1));
    }
    if col + 1 < size {
        neighbors.push((row, col + 1));
    }
    neighbors
}

/// Resolves the full grid from the catalog, unlocked records and progress.
///
/// Unlocked ids missing from the catalog are reported and otherwise ignored.
pub fn resolve_grid(
    catalog: &AchievementCatalog,
    unlocked: &UnlockedMap,
    progress: &ProgressMap,
    diagnostics: &dyn DiagnosticSink,
) -> AchievementGridState {
    let mut unknown: Vec<&String> = unlocked.keys().filter(|id| !catalog.contains(id)).collect();
    unknown.sort();
    for id in unknown {
        diagnostics.report(Diagnostic::UnknownUnlockedId { id: id.clone() });
    }

    let size = catalog.grid_size();
    let is_unlocked = |row: usize, col: usize| -> bool {
        catalog
            .at(row, col)
            .map(|def| unlocked.contains_key(&def.id))
            .unwrap_or(false)
    };

    let cells = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let Some(def) = catalog.at(row, col) else {
                        return GridCell::filler(row, col);
                    };

                    let state = if is_unlocked(row, col) {
                        CellState::Unlocked
                    } else if orthogonal_neighbors(row, col, size)
                        .into_iter()
                        .any(|(r, c)| is_unlocked(r, c))
                    {
                        CellState::Visible
                    } else {
                        CellState::Locked
                    };

                    let progress = match state {
                        CellState::Locked => None,
                        _ => progress.get(&def.id).copied(),
                    };
                    let record = match state {
                        CellState::Unlocked => unlocked.get(&def.id).cloned(),
                        _ => None,
                    };

                    GridCell {
                        row,
                        col,
                        state,
                        achievement: Some(def.clone()),
                        progress,
                        unlocked: record,
                    }
                })
                .collect()
        })
        .collect();

    AchievementGridState::from_rows(size, cells)
}

/// Resolves from a plain list of ids, stamping each with `unlocked_at = 0`.
pub fn resolve_ids<'a>(
    catalog: &AchievementCatalog,
    ids: impl IntoIterator<Item = &'a str>,
    diagnostics: &dyn DiagnosticSink,
) -> AchievementGridState {
    let unlocked: UnlockedMap = ids
        .into_iter()
        .map(|id| (id.to_string(), UnlockedRecord::new(id, 0)))
        .collect();
    resolve_grid(catalog, &unlocked, &ProgressMap::new(), diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::{AchievementDefinition, Placement, Rarity};
    use crate::diagnostics::{NullSink, RecordingSink};

    fn def(id: &str) -> AchievementDefinition {
        AchievementDefinition::new(id, id, "", "*", Rarity::Common, 10)
    }

    fn full_catalog(size: usize) -> AchievementCatalog {
        let mut placements = Vec::new();
        for row in 0..size {
            for col in 0..size {
                placements.push(Placement::new(row, col, def(&format!("{}_{}", row, col))));
            }
        }
        AchievementCatalog::new(size, placements).unwrap()
    }

    #[test]
    fn test_neighbors_center_and_corner() {
        assert_eq!(orthogonal_neighbors(1, 1, 3).len(), 4);
        assert_eq!(orthogonal_neighbors(0, 0, 3), vec![(1, 0), (0, 1)]);
        assert!(orthogonal_neighbors(0, 0, 1).is_empty());
    }

    #[test]
    fn test_filler_cells_never_reveal() {
        let catalog = AchievementCatalog::new(3, vec![Placement::new(1, 1, def("center"))]).unwrap();
        let grid = resolve_ids(&catalog, ["center"], &NullSink);

        assert_eq!(grid.state_at(1, 1), Some(CellState::Unlocked));
        // Filler cells stay locked even next to an unlocked cell
        for (r, c) in [(0, 1), (1, 0), (1, 2), (2, 1), (0, 0), (2, 2)] {
            assert_eq!(grid.state_at(r, c), Some(CellState::Locked));
        }
        assert!(grid.cell(0, 1).unwrap().is_filler());
        assert!(!grid.cell(1, 1).unwrap().is_filler());
    }

    #[test]
    fn test_full_catalog_reveals_orthogonal_neighbors_only() {
        let catalog = full_catalog(3);
        let grid = resolve_ids(&catalog, ["1_1"], &NullSink);

        for (r, c) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert_eq!(grid.state_at(r, c), Some(CellState::Visible), "({}, {})", r, c);
        }
        for (r, c) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(grid.state_at(r, c), Some(CellState::Locked), "({}, {})", r, c);
        }
    }

    #[test]
    fn test_visibility_is_not_transitive() {
        let catalog = full_catalog(5);
        let grid = resolve_ids(&catalog, ["0_0"], &NullSink);
        assert_eq!(grid.state_at(0, 1), Some(CellState::Visible));
        assert_eq!(grid.state_at(0, 2), Some(CellState::Locked));
    }

    #[test]
    fn test_counts_and_index() {
        let catalog = full_catalog(3);
        let grid = resolve_ids(&catalog, ["0_0", "2_2"], &NullSink);
        assert_eq!(grid.unlocked_count(), 2);
        assert_eq!(grid.total_count(), 9);
        assert_eq!(grid.visible_count(), 4);
        assert!(!grid.is_complete());
        assert_eq!(grid.position_of("2_2"), Some((2, 2)));
        assert_eq!(grid.cell_for("0_0").map(|c| c.state), Some(CellState::Unlocked));
    }

    #[test]
    fn test_complete_when_everything_unlocked() {
        let catalog = full_catalog(2);
        let grid = resolve_ids(&catalog, ["0_0", "0_1", "1_0", "1_1"], &NullSink);
        assert!(grid.is_complete());
        assert_eq!(grid.completion_percentage(), 100.0);
    }

    #[test]
    fn test_unknown_id_reported_not_rendered() {
        let catalog = full_catalog(2);
        let sink = RecordingSink::new();
        let grid = resolve_ids(&catalog, ["ghost"], &sink);

        assert_eq!(grid.unlocked_count(), 0);
        assert_eq!(
            sink.entries(),
            vec![Diagnostic::UnknownUnlockedId {
                id: "ghost".to_string()
            }]
        );
    }

    #[test]
    fn test_progress_only_on_revealed_cells() {
        let catalog = full_catalog(3);
        let mut unlocked = UnlockedMap::new();
        unlocked.insert("1_1".to_string(), UnlockedRecord::new("1_1", 1_700_000_000));
        let mut progress = ProgressMap::new();
        for id in ["0_0", "0_1", "1_1"] {
            progress.insert(id.to_string(), AchievementProgress::new(3, 10));
        }

        let grid = resolve_grid(&catalog, &unlocked, &progress, &NullSink);
        assert!(grid.cell(0, 0).unwrap().progress.is_none());
        assert!(grid.cell(0, 1).unwrap().progress.is_some());
        assert!(grid.cell(1, 1).unwrap().progress.is_some());
    }

    #[test]
    fn test_unlocked_record_set_iff_unlocked() {
        let catalog = full_catalog(3);
        let grid = resolve_ids(&catalog, ["0_0", "1_2"], &NullSink);
        for cell in grid.cells() {
            assert_eq!(
                cell.unlocked.is_some(),
                cell.state == CellState::Unlocked,
                "({}, {})",
                cell.row,
                cell.col
            );
        }
    }

    #[test]
    fn test_resolve_is_pure() {
        let catalog = full_catalog(4);
        let a = resolve_ids(&catalog, ["1_1", "3_0"], &NullSink);
        let b = resolve_ids(&catalog, ["1_1", "3_0"], &NullSink);
        assert_eq!(a, b);
    }
}
