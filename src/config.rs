//! Mosaic configuration (`~/.mosaic/config.json`).

use crate::constants::DEFAULT_CELEBRATION_MS;
use crate::error::{ConfigError, GridConfigError};
use crate::grid::layout::{
    check_dimension, GridLayoutEngine, DEFAULT_FALLBACK_CELL_SIZE, DEFAULT_PLACEHOLDER_CELL_SIZE,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Largest grid a config may ask for.
pub const MAX_GRID_SIZE: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicConfig {
    /// Cells per side.
    pub grid_size: usize,
    pub cell_gap: f64,
    pub placeholder_cell_size: f64,
    pub fallback_cell_size: f64,
    /// How long the celebration plays after the break finishes.
    pub celebration_ms: u64,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            grid_size: 7,
            cell_gap: 0.0,
            placeholder_cell_size: DEFAULT_PLACEHOLDER_CELL_SIZE,
            fallback_cell_size: DEFAULT_FALLBACK_CELL_SIZE,
            celebration_ms: DEFAULT_CELEBRATION_MS,
        }
    }
}

impl MosaicConfig {
    pub fn validate(&self) -> Result<(), GridConfigError> {
        if self.grid_size == 0 {
            return Err(GridConfigError::ZeroGridSize);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(GridConfigError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        check_dimension("cell_gap", self.cell_gap, 0.0)?;
        check_dimension("placeholder_cell_size", self.placeholder_cell_size, 1.0)?;
        check_dimension("fallback_cell_size", self.fallback_cell_size, 1.0)?;
        Ok(())
    }

    /// Layout engine for this grid.
    pub fn layout_engine(&self) -> Result<GridLayoutEngine, GridConfigError> {
        GridLayoutEngine::with_sizes(
            self.grid_size,
            self.cell_gap,
            self.placeholder_cell_size,
            self.fallback_cell_size,
        )
    }
}

/// Default config location.
pub fn config_path() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(".mosaic").join("config.json"))
}

/// Loads and validates a config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<MosaicConfig, ConfigError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(MosaicConfig::default()),
        Err(e) => return Err(e.into()),
    };
    parse_config(&json)
}

pub fn parse_config(json: &str) -> Result<MosaicConfig, ConfigError> {
    let config: MosaicConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
