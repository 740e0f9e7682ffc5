//! Game status machine.
//!
//! `Waiting -> Playing -> {Won | GameOver}`. Both terminal states are
//! absorbing.

use serde::{Deserialize, Serialize};

/// Status of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Constructed, waiting for `start`.
    #[default]
    Waiting,
    /// Accepting plays.
    Playing,
    /// The sequence appeared in the buffer.
    Won,
    /// The buffer filled without the sequence appearing.
    GameOver,
}

impl GameStatus {
    /// Check if this is a terminal status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::GameOver)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Waiting => "Waiting",
            GameStatus::Playing => "Playing",
            GameStatus::Won => "Won",
            GameStatus::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}
