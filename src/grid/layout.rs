//! Cell sizing from the container width.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::GridConfigError;

/// Cell size used before the container has been measured.
pub const DEFAULT_PLACEHOLDER_CELL_SIZE: f64 = 40.0;

/// Cell size used when the container width is unusable.
pub const DEFAULT_FALLBACK_CELL_SIZE: f64 = 40.0;

/// Pixel dimensions of the mosaic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub cell_size: f64,
    pub grid_width: f64,
    pub grid_height: f64,
}

impl GridLayout {
    /// Layout for fixed cells of `cell_size` with `gap` between them.
    pub fn from_cell_size(cell_size: f64, grid_size: usize, gap: f64) -> Self {
        let n = grid_size as f64;
        let extent = cell_size * n + gap * (n - 1.0).max(0.0);
        Self {
            cell_size,
            grid_width: extent,
            grid_height: extent,
        }
    }
}

/// Cell size that fits `grid_size` cells and their gaps in `container_width`.
/// `None` when the width leaves no room for a cell.
pub fn compute_layout(container_width: f64, grid_size: usize, gap: f64) -> Option<GridLayout> {
    if grid_size == 0 || !container_width.is_finite() || container_width <= 0.0 {
        return None;
    }
    let usable = container_width - (grid_size as f64 - 1.0) * gap;
    let cell_size = (usable / grid_size as f64).floor();
    if cell_size < 1.0 {
        return None;
    }
    Some(GridLayout::from_cell_size(cell_size, grid_size, gap))
}

/// Measures once, then holds the layout fixed.
///
/// Re-measuring is not supported: the first usable width wins, which keeps
/// running animations from reacting to resize feedback.
#[derive(Debug, Clone)]
pub struct GridLayoutEngine {
    grid_size: usize,
    gap: f64,
    placeholder_cell_size: f64,
    fallback_cell_size: f64,
    frozen: Option<GridLayout>,
}

impl GridLayoutEngine {
    pub fn new(grid_size: usize, gap: f64) -> Result<Self, GridConfigError> {
        Self::with_sizes(
            grid_size,
            gap,
            DEFAULT_PLACEHOLDER_CELL_SIZE,
            DEFAULT_FALLBACK_CELL_SIZE,
        )
    }

    pub fn with_sizes(
        grid_size: usize,
        gap: f64,
        placeholder_cell_size: f64,
        fallback_cell_size: f64,
    ) -> Result<Self, GridConfigError> {
        if grid_size == 0 {
            return Err(GridConfigError::ZeroGridSize);
        }
        check_dimension("cell_gap", gap, 0.0)?;
        check_dimension("placeholder_cell_size", placeholder_cell_size, 1.0)?;
        check_dimension("fallback_cell_size", fallback_cell_size, 1.0)?;

        Ok(Self {
            grid_size,
            gap,
            placeholder_cell_size,
            fallback_cell_size,
            frozen: None,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn is_measured(&self) -> bool {
        self.frozen.is_some()
    }

    /// Layout to render with before any measurement arrives.
    pub fn current(&self) -> GridLayout {
        self.frozen.unwrap_or_else(|| {
            GridLayout::from_cell_size(self.placeholder_cell_size, self.grid_size, self.gap)
        })
    }

    /// Feeds a measured container width.
    ///
    /// The first usable width freezes the layout. An unusable width yields
    /// the fallback size and leaves the engine unmeasured.
    pub fn layout(&mut self, container_width: f64, diagnostics: &dyn DiagnosticSink) -> GridLayout {
        if let Some(frozen) = self.frozen {
            return frozen;
        }
        match compute_layout(container_width, self.grid_size, self.gap) {
            Some(layout) => {
                self.frozen = Some(layout);
                layout
            }
            None => {
                diagnostics.report(Diagnostic::LayoutFallback { container_width });
                GridLayout::from_cell_size(self.fallback_cell_size, self.grid_size, self.gap)
            }
        }
    }
}

pub(crate) fn check_dimension(field: &'static str, value: f64, min: f64) -> Result<(), GridConfigError> {
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(GridConfigError::InvalidDimension { field, value, min })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{NullSink, RecordingSink};

    #[test]
    fn test_floor_division() {
        let layout = compute_layout(350.0, 8, 0.0).unwrap();
        assert_eq!(layout.cell_size, 43.0);
        assert_eq!(layout.grid_width, 344.0);
        assert_eq!(layout.grid_height, 344.0);
    }

    #[test]
    fn test_gap_subtracted_before_dividing() {
        // 7 cells, 6 gaps of 4px: (300 - 24) / 7 = 39.43 -> 39
        let layout = compute_layout(300.0, 7, 4.0).unwrap();
        assert_eq!(layout.cell_size, 39.0);
        assert_eq!(layout.grid_width, 39.0 * 7.0 + 24.0);
    }

    #[test]
    fn test_zero_width_falls_back() {
        let mut engine = GridLayoutEngine::new(7, 0.0).unwrap();
        let sink = RecordingSink::new();
        let layout = engine.layout(0.0, &sink);
        assert_eq!(layout.cell_size, DEFAULT_FALLBACK_CELL_SIZE);
        assert!(!engine.is_measured());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_negative_width_falls_back() {
        let mut engine = GridLayoutEngine::new(7, 0.0).unwrap();
        assert!(engine.layout(-20.0, &NullSink).cell_size > 0.0);
    }

    #[test]
    fn test_first_measurement_frozen() {
        let mut engine = GridLayoutEngine::new(5, 0.0).unwrap();
        let first = engine.layout(500.0, &NullSink);
        assert_eq!(first.cell_size, 100.0);
        let second = engine.layout(250.0, &NullSink);
        assert_eq!(second, first);
        assert_eq!(engine.current(), first);
    }

    #[test]
    fn test_placeholder_before_measurement() {
        let engine = GridLayoutEngine::with_sizes(4, 0.0, 32.0, 40.0).unwrap();
        assert_eq!(engine.current().cell_size, 32.0);
        assert_eq!(engine.current().grid_width, 128.0);
    }

    #[test]
    fn test_too_narrow_is_unusable() {
        assert!(compute_layout(5.0, 8, 0.0).is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert_eq!(
            GridLayoutEngine::new(0, 0.0).unwrap_err(),
            GridConfigError::ZeroGridSize
        );
        assert!(GridLayoutEngine::new(3, -1.0).is_err());
        assert!(GridLayoutEngine::with_sizes(3, 0.0, 0.0, 40.0).is_err());
        assert!(GridLayoutEngine::with_sizes(3, 0.0, 40.0, f64::NAN).is_err());
    }
}
