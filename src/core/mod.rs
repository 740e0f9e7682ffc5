//! Core puzzle types: configuration, RNG, grid, selection axis, status.
//!
//! These are the building blocks the [`GameEngine`](crate::rules::GameEngine)
//! is assembled from. None of them perform I/O.

pub mod action;
pub mod config;
pub mod grid;
pub mod rng;
pub mod state;

pub use action::{PlayRecord, SelectionAxis};
pub use config::{
    GameConfig, DEFAULT_BUFFER_SIZE, DEFAULT_GRID_SIZE, DEFAULT_PALETTE, MAX_GRID_CELLS,
};
pub use grid::{Cell, Grid};
pub use rng::GameRng;
pub use state::GameStatus;
