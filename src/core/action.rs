//! Selection axis and move records.
//!
//! Every successful play fixes a line of the grid for the next play. The
//! player alternates between picking along that row and picking along
//! that column.

use serde::{Deserialize, Serialize};

/// Which line of the grid the next play is constrained to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionAxis {
    /// Pick a column within the fixed row.
    #[default]
    Row,
    /// Pick a row within the fixed column.
    Column,
}

impl SelectionAxis {
    /// The other axis.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            SelectionAxis::Row => SelectionAxis::Column,
            SelectionAxis::Column => SelectionAxis::Row,
        }
    }

    /// Resolve a play to `(row, col)` given the fixed line index.
    #[must_use]
    pub const fn target(self, fixed: usize, position: usize) -> (usize, usize) {
        match self {
            SelectionAxis::Row => (fixed, position),
            SelectionAxis::Column => (position, fixed),
        }
    }

    /// Number of positions along this axis for a `rows x cols` grid.
    #[must_use]
    pub const fn extent(self, rows: usize, cols: usize) -> usize {
        match self {
            SelectionAxis::Row => cols,
            SelectionAxis::Column => rows,
        }
    }
}

impl std::fmt::Display for SelectionAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionAxis::Row => write!(f, "row"),
            SelectionAxis::Column => write!(f, "column"),
        }
    }
}

/// A successful play, as recorded in the engine's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// Axis the play was made along.
    pub axis: SelectionAxis,
    /// Row of the consumed cell.
    pub row: usize,
    /// Column of the consumed cell.
    pub col: usize,
    /// Value appended to the buffer.
    pub value: u8,
}
