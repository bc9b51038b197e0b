//! The achievement mosaic: visibility, corner rounding and layout.

pub mod corners;
pub mod layout;
pub mod types;
pub mod visibility;

pub use corners::{all_corners, corners_for, CornerFlags};
pub use layout::{compute_layout, GridLayout, GridLayoutEngine};
pub use types::{AchievementGridState, CellState, GridCell};
pub use visibility::{resolve_grid, resolve_ids, ProgressMap, UnlockedMap};
