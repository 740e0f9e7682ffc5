//! The puzzle engine.
//!
//! `GameEngine` owns the grid, the buffer, the target sequence and the
//! status machine. Callers construct it from a [`GameConfig`], call
//! [`start`](GameEngine::start), then feed positions to
//! [`play`](GameEngine::play) until [`is_game_over`](GameEngine::is_game_over).
//!
//! ## Play rules
//!
//! - On the `Row` axis, `play(p)` picks cell `(current, p)`.
//! - On the `Column` axis, `play(p)` picks cell `(p, current)`.
//! - A successful pick appends the cell's value to the buffer, marks the
//!   cell used, flips the axis and fixes `current = p`.
//! - Picking a used cell, or playing while not `Playing`, is ignored.

use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use crate::core::{Cell, GameConfig, GameRng, GameStatus, Grid, PlayRecord, SelectionAxis};
use crate::error::{ConfigError, EngineError};

/// Why a play left the game untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The game is not in the `Playing` status.
    NotPlaying(GameStatus),
    /// The target cell has already been played.
    CellUsed { row: usize, col: usize },
}

/// Result of a call to [`GameEngine::play`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The cell was consumed; `status` is the status after evaluation.
    Played { record: PlayRecord, status: GameStatus },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl PlayOutcome {
    /// Check if the play changed the game.
    #[must_use]
    pub const fn is_played(&self) -> bool {
        matches!(self, PlayOutcome::Played { .. })
    }
}

/// Single-player puzzle engine.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    seed: u64,
    grid: Grid,
    buffer: SmallVec<[u8; 8]>,
    status: GameStatus,
    axis: SelectionAxis,
    current_position: usize,
    history: Vec<PlayRecord>,
}

impl GameEngine {
    /// Build an engine with a randomly filled grid.
    ///
    /// Uses `config.seed` when set, otherwise draws a fresh seed.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let grid = Grid::generate(config.rows, config.cols, &config.palette, &mut rng);
        debug!(seed = rng.seed(), rows = config.rows, cols = config.cols, "generated grid");

        Ok(Self::assemble(config, rng.seed(), grid))
    }

    /// Build an engine over an explicit grid.
    ///
    /// The grid's shape must match `config.rows x config.cols`, and every
    /// unplayed cell must hold a palette value.
    pub fn with_grid(config: GameConfig, grid: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.rows() != config.rows || grid.cols() != config.cols {
            return Err(ConfigError::GridShapeMismatch {
                rows: config.rows,
                cols: config.cols,
                actual_rows: grid.rows(),
                actual_cols: grid.cols(),
            });
        }
        for (row, cells) in grid.iter_rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(value) = cell.value().filter(|v| !config.palette.contains(v)) {
                    return Err(ConfigError::GridValueNotInPalette { row, col, value });
                }
            }
        }
        let seed = config.seed.unwrap_or_default();
        Ok(Self::assemble(config, seed, grid))
    }

    fn assemble(config: GameConfig, seed: u64, grid: Grid) -> Self {
        Self {
            config,
            seed,
            grid,
            buffer: SmallVec::new(),
            status: GameStatus::Waiting,
            axis: SelectionAxis::Row,
            current_position: 0,
            history: Vec::new(),
        }
    }

    /// Move from `Waiting` to `Playing`.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.status != GameStatus::Waiting {
            return Err(EngineError::NotWaiting(self.status));
        }
        self.status = GameStatus::Playing;
        info!(
            sequence_len = self.config.sequence.len(),
            buffer_size = self.config.buffer_size,
            "game started"
        );
        Ok(())
    }

    /// Pick the cell at `position` along the current axis.
    ///
    /// Plays outside `Playing` are ignored whatever the position. Once
    /// running, an out-of-range position is an error and changes nothing.
    pub fn play(&mut self, position: usize) -> Result<PlayOutcome, EngineError> {
        if self.status != GameStatus::Playing {
            trace!(status = %self.status, "play ignored: game not running");
            return Ok(PlayOutcome::Ignored(IgnoreReason::NotPlaying(self.status)));
        }

        let bound = self.axis.extent(self.grid.rows(), self.grid.cols());
        if position >= bound {
            warn!(position, bound, axis = %self.axis, "position out of bounds");
            return Err(EngineError::InvalidPosition {
                position,
                bound,
                axis: self.axis,
            });
        }

        let (row, col) = self.axis.target(self.current_position, position);
        let Some(value) = self.grid.take(row, col) else {
            trace!(row, col, "play ignored: cell already used");
            return Ok(PlayOutcome::Ignored(IgnoreReason::CellUsed { row, col }));
        };

        debug!("{},{} = {:02X}", row, col, value);

        let record = PlayRecord {
            axis: self.axis,
            row,
            col,
            value,
        };
        self.buffer.push(value);
        self.history.push(record);
        self.axis = self.axis.toggle();
        self.current_position = position;

        self.evaluate();

        Ok(PlayOutcome::Played {
            record,
            status: self.status,
        })
    }

    /// Re-evaluate win/loss after a successful play.
    fn evaluate(&mut self) {
        if self.sequence_found() {
            self.status = GameStatus::Won;
            info!(buffer_len = self.buffer.len(), "sequence found");
            return;
        }

        if self.is_buffer_full() {
            self.status = GameStatus::GameOver;
            info!(buffer_size = self.config.buffer_size, "buffer full");
        }
    }

    /// Check if any contiguous window of the buffer equals the sequence.
    fn sequence_found(&self) -> bool {
        let sequence = self.sequence();
        self.buffer.len() >= sequence.len()
            && self.buffer.windows(sequence.len()).any(|w| w == sequence)
    }

    // === Queries ===

    /// The configuration this engine was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed used for the grid fill.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get a cell, or `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row, col)
    }

    /// Values played so far, in order.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Buffer capacity.
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.config.buffer_size
    }

    /// The target sequence.
    #[must_use]
    pub fn sequence(&self) -> &[u8] {
        &self.config.sequence
    }

    /// Current game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Axis the next play is constrained to.
    #[must_use]
    pub fn axis(&self) -> SelectionAxis {
        self.axis
    }

    /// Index of the row or column fixed by the last play.
    #[must_use]
    pub fn current_position(&self) -> usize {
        self.current_position
    }

    /// Successful plays, oldest first.
    #[must_use]
    pub fn history(&self) -> &[PlayRecord] {
        &self.history
    }

    /// Check if the buffer has reached its capacity.
    #[must_use]
    pub fn is_buffer_full(&self) -> bool {
        self.buffer.len() >= self.config.buffer_size
    }

    /// True once the buffer is full or the status is terminal.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_buffer_full() || self.status.is_terminal()
    }

    /// Check if a cell lies on the line the next play is constrained to.
    #[must_use]
    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        match self.axis {
            SelectionAxis::Row => row == self.current_position,
            SelectionAxis::Column => col == self.current_position,
        }
    }

    /// Positions on the active line whose cell is still unused.
    #[must_use]
    pub fn legal_positions(&self) -> Vec<usize> {
        let bound = self.axis.extent(self.grid.rows(), self.grid.cols());
        (0..bound)
            .filter(|&p| {
                let (row, col) = self.axis.target(self.current_position, p);
                matches!(self.grid.get(row, col), Some(Cell::Value(_)))
            })
            .collect()
    }

    /// Check if the active line still has an unused cell.
    ///
    /// The status stays `Playing` on a dead end; callers decide how to
    /// treat it.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        !self.legal_positions().is_empty()
    }
}
