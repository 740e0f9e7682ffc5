//! # cyber-hacking
//!
//! A breach-protocol style grid puzzle.
//!
//! The player picks cells from a grid of hex byte values, alternating
//! between the row and the column fixed by the previous pick. Every picked
//! value lands in a buffer; the goal is to get the target sequence to appear
//! contiguously in the buffer before it fills.
//!
//! ```
//! use cyber_hacking::{GameConfig, GameEngine, GameStatus, Grid};
//!
//! let config = GameConfig::new()
//!     .with_dimensions(2, 2)
//!     .with_palette([1, 2])
//!     .with_sequence([1, 2])
//!     .with_buffer_size(3);
//! let grid = Grid::from_rows(&[[1u8, 1], [2, 1]]).unwrap();
//! let mut engine = GameEngine::with_grid(config, grid).unwrap();
//!
//! engine.start().unwrap();
//! engine.play(0).unwrap(); // row 0, column 0 -> 1
//! engine.play(1).unwrap(); // column 0, row 1 -> 2
//! assert_eq!(engine.status(), GameStatus::Won);
//! ```
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, grid, selection axis, status
//! - `rules`: The `GameEngine` state machine
//! - `display`: Text rendering for the console front end
//! - `error`: Configuration and engine errors

pub mod core;
pub mod display;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Cell, GameConfig, GameRng, GameStatus, Grid, PlayRecord, SelectionAxis};

pub use crate::display::{Styling, TextRenderer};

pub use crate::error::{ConfigError, EngineError};

pub use crate::rules::{GameEngine, IgnoreReason, PlayOutcome};
