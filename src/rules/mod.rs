//! Puzzle rules.
//!
//! `GameEngine` applies plays to the grid and decides when the game is
//! won or lost:
//! - Plays alternate between the fixed row and the fixed column
//! - Each played value lands in the buffer
//! - The game is won when the sequence appears contiguously in the buffer
//! - The game is lost when the buffer fills first

pub mod engine;

pub use engine::{GameEngine, IgnoreReason, PlayOutcome};
