//! Corner rounding for mosaic cells.
//!
//! Each cell corner sits on a grid vertex. Corners at the four extreme
//! vertices of the mosaic are always rounded, and corners on any other part
//! of the outer edge are always square so the mosaic boundary stays flush.
//! Interior corners of an unlocked window are rounded. Interior corners of
//! an opaque cell are rounded only when some cell around that vertex is an
//! unlocked window; if every cell around it is opaque the corner is square
//! and the opaque region reads as one slab.

use super::types::AchievementGridState;
use serde::{Deserialize, Serialize};

/// Rounding flags for the four corners of one cell. `true` = rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CornerFlags {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl CornerFlags {
    pub const SQUARE: CornerFlags = CornerFlags {
        top_left: false,
        top_right: false,
        bottom_left: false,
        bottom_right: false,
    };

    pub const ROUND: CornerFlags = CornerFlags {
        top_left: true,
        top_right: true,
        bottom_left: true,
        bottom_right: true,
    };

    /// Flags after rotating the cell by 180°.
    pub fn rotated_180(&self) -> CornerFlags {
        CornerFlags {
            top_left: self.bottom_right,
            top_right: self.bottom_left,
            bottom_left: self.top_right,
            bottom_right: self.top_left,
        }
    }
}

/// How a grid vertex relates to the mosaic outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexKind {
    /// One of the four outer corners of the mosaic.
    Extreme,
    /// On the outer edge but not a corner of it.
    Edge,
    Interior,
}

fn vertex_kind(vr: usize, vc: usize, size: usize) -> VertexKind {
    let row_edge = vr == 0 || vr == size;
    let col_edge = vc == 0 || vc == size;
    match (row_edge, col_edge) {
        (true, true) => VertexKind::Extreme,
        (true, false) | (false, true) => VertexKind::Edge,
        (false, false) => VertexKind::Interior,
    }
}

/// True when every in-bounds cell touching vertex `(vr, vc)` is opaque.
fn all_hidden_around(grid: &AchievementGridState, vr: usize, vc: usize) -> bool {
    let rows = vr.saturating_sub(1)..=vr;
    rows.flat_map(|r| (vc.saturating_sub(1)..=vc).map(move |c| (r, c)))
        .filter_map(|(r, c)| grid.state_at(r, c))
        .all(|state| state.is_hidden())
}

fn corner_rounded(grid: &AchievementGridState, cell_hidden: bool, vr: usize, vc: usize) -> bool {
    match vertex_kind(vr, vc, grid.size()) {
        VertexKind::Extreme => true,
        VertexKind::Edge => false,
        VertexKind::Interior if !cell_hidden => true,
        VertexKind::Interior => !all_hidden_around(grid, vr, vc),
    }
}

/// Rounding flags for the cell at `(row, col)`. Outside the grid every
/// corner is square.
pub fn corners_for(grid: &AchievementGridState, row: usize, col: usize) -> CornerFlags {
    let Some(state) = grid.state_at(row, col) else {
        return CornerFlags::SQUARE;
    };
    let hidden = state.is_hidden();

    CornerFlags {
        top_left: corner_rounded(grid, hidden, row, col),
        top_right: corner_rounded(grid, hidden, row, col + 1),
        bottom_left: corner_rounded(grid, hidden, row + 1, col),
        bottom_right: corner_rounded(grid, hidden, row + 1, col + 1),
    }
}

/// Rounding flags for every cell, row-major.
pub fn all_corners(grid: &AchievementGridState) -> Vec<Vec<CornerFlags>> {
    (0..grid.size())
        .map(|row| (0..grid.size()).map(|col| corners_for(grid, row, col)).collect())
        .collect()
}
