//! Game configuration.
//!
//! A `GameConfig` fixes everything about a puzzle except the random grid
//! fill: grid shape, the palette cells are drawn from, the target sequence,
//! and the buffer capacity. Configs can be built in code with the `with_*`
//! builders or loaded from TOML:
//!
//! ```toml
//! rows = 5
//! cols = 5
//! palette = [0xE9, 0x1C, 0x55, 0xBD]
//! sequence = [0xE9, 0x1C]
//! buffer_size = 4
//! seed = 1234
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default palette: `E9 1C 55 BD`.
pub const DEFAULT_PALETTE: [u8; 4] = [0xE9, 0x1C, 0x55, 0xBD];

/// Default grid side length.
pub const DEFAULT_GRID_SIZE: usize = 5;

/// Default buffer capacity.
pub const DEFAULT_BUFFER_SIZE: usize = 5;

/// Largest grid, in cells, a configuration may describe.
pub const MAX_GRID_CELLS: usize = 1 << 16;

/// Complete puzzle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub cols: usize,

    /// Values grid cells are sampled from.
    pub palette: Vec<u8>,

    /// Target the player must assemble contiguously in the buffer.
    pub sequence: Vec<u8>,

    /// Maximum number of values the buffer holds.
    pub buffer_size: usize,

    /// RNG seed for the grid fill. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_SIZE,
            cols: DEFAULT_GRID_SIZE,
            palette: DEFAULT_PALETTE.to_vec(),
            sequence: DEFAULT_PALETTE.to_vec(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default 5x5 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: impl Into<Vec<u8>>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Set the target sequence.
    #[must_use]
    pub fn with_sequence(mut self, sequence: impl Into<Vec<u8>>) -> Self {
        self.sequence = sequence.into();
        self
    }

    /// Set the buffer capacity.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration describes a playable puzzle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= MAX_GRID_CELLS => {}
            _ => {
                return Err(ConfigError::GridTooLarge {
                    rows: self.rows,
                    cols: self.cols,
                    max: MAX_GRID_CELLS,
                })
            }
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.sequence.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        if let Some(&value) = self.sequence.iter().find(|v| !self.palette.contains(v)) {
            return Err(ConfigError::ValueNotInPalette { value });
        }
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        if self.sequence.len() > self.buffer_size {
            return Err(ConfigError::SequenceTooLong {
                sequence: self.sequence.len(),
                buffer: self.buffer_size,
            });
        }
        Ok(())
    }
}
