//! Error types for configuration and engine operations.
//!
//! Only contract violations are errors. Plays that the rules simply refuse
//! (a used cell, a game that is not running) are reported as
//! [`PlayOutcome::Ignored`](crate::rules::PlayOutcome) instead.

use std::path::PathBuf;

use crate::core::{GameStatus, SelectionAxis};

/// Errors raised while building or loading a [`GameConfig`](crate::core::GameConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("grid of {rows}x{cols} exceeds the limit of {max} cells")]
    GridTooLarge { rows: usize, cols: usize, max: usize },

    #[error("palette must contain at least one value")]
    EmptyPalette,

    #[error("sequence must contain at least one value")]
    EmptySequence,

    #[error("sequence value {value:02X} is not in the palette")]
    ValueNotInPalette { value: u8 },

    #[error("buffer size must be at least 1")]
    ZeroBufferSize,

    #[error("sequence of length {sequence} cannot fit in a buffer of size {buffer}")]
    SequenceTooLong { sequence: usize, buffer: usize },

    #[error("grid is {actual_rows}x{actual_cols} but config expects {rows}x{cols}")]
    GridShapeMismatch {
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("grid row {row} has {len} cells, expected {expected}")]
    RaggedGrid { row: usize, len: usize, expected: usize },

    #[error("grid holds {actual} cells, expected {expected}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("grid value {value:02X} at ({row}, {col}) is not in the palette")]
    GridValueNotInPalette { row: usize, col: usize, value: u8 },

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Errors raised by [`GameEngine`](crate::rules::GameEngine) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("game can only be started while waiting (status: {0})")]
    NotWaiting(GameStatus),

    #[error("position {position} is out of bounds along the {axis} (must be < {bound})")]
    InvalidPosition {
        position: usize,
        bound: usize,
        axis: SelectionAxis,
    },
}
