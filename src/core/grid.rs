//! The puzzle grid.
//!
//! A fixed-size, row-major array of cells. Cells start out holding a
//! palette value and are flipped to [`Cell::Used`] when played. The grid
//! is never resized.

use serde::{Deserialize, Serialize};

use super::config::MAX_GRID_CELLS;
use super::rng::GameRng;
use crate::error::ConfigError;

/// A single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// An unplayed cell holding a palette value.
    Value(u8),
    /// A cell that has already been played.
    Used,
}

impl Cell {
    /// The held value, or `None` if the cell has been used.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Cell::Value(v) => Some(v),
            Cell::Used => None,
        }
    }

    /// Check if the cell has been played.
    #[must_use]
    pub const fn is_used(self) -> bool {
        matches!(self, Cell::Used)
    }
}

/// Fixed-size grid of cells.
///
/// `cells.len() == rows * cols` always holds; deserialized grids are checked
/// before they are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct GridData {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridData> for Grid {
    type Error = ConfigError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        let GridData { rows, cols, cells } = data;
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        let expected = match rows.checked_mul(cols) {
            Some(n) if n <= MAX_GRID_CELLS => n,
            _ => {
                return Err(ConfigError::GridTooLarge {
                    rows,
                    cols,
                    max: MAX_GRID_CELLS,
                })
            }
        };
        if cells.len() != expected {
            return Err(ConfigError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }
}

impl Grid {
    /// Fill a `rows x cols` grid by sampling each cell uniformly from `palette`.
    ///
    /// An empty palette yields a grid of used cells; callers validate the
    /// palette through [`GameConfig::validate`](super::GameConfig::validate).
    pub fn generate(rows: usize, cols: usize, palette: &[u8], rng: &mut GameRng) -> Self {
        let cells = (0..rows * cols)
            .map(|_| rng.pick(palette).map_or(Cell::Used, Cell::Value))
            .collect();
        Self { rows, cols, cells }
    }

    /// Build a grid from explicit row values.
    ///
    /// All rows must have the same, non-zero length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if row_count == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: row_count,
                cols,
            });
        }

        let mut cells = Vec::with_capacity(row_count * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(ConfigError::RaggedGrid {
                    row,
                    len: values.len(),
                    expected: cols,
                });
            }
            cells.extend(values.iter().copied().map(Cell::Value));
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Get a cell, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Consume a cell, returning its value.
    ///
    /// Returns `None` (and changes nothing) if the cell is out of bounds or
    /// already used.
    pub fn take(&mut self, row: usize, col: usize) -> Option<u8> {
        let i = self.index(row, col)?;
        let value = self.cells[i].value()?;
        self.cells[i] = Cell::Used;
        Some(value)
    }

    /// Iterate over the cells of one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let start = row.min(self.rows) * self.cols;
        let end = if row < self.rows { start + self.cols } else { start };
        self.cells[start..end].iter().copied()
    }

    /// Iterate over all rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols.max(1))
    }

    /// Count used cells.
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_used()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_palette() {
        let mut rng = GameRng::new(42);
        let palette = [0xE9, 0x1C, 0x55, 0xBD];
        let grid = Grid::generate(5, 5, &palette, &mut rng);

        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 5);
        for row in grid.iter_rows() {
            assert_eq!(row.len(), 5);
            for cell in row {
                assert!(palette.contains(&cell.value().unwrap()));
            }
        }
        assert_eq!(grid.used_count(), 0);
    }

    #[test]
    fn test_generate_deterministic() {
        let palette = [1, 2, 3, 4];
        let a = Grid::generate(5, 5, &palette, &mut GameRng::new(9));
        let b = Grid::generate(5, 5, &palette, &mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.get(1, 2), Some(Cell::Value(6)));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        let empty: [[u8; 0]; 0] = [];
        assert!(matches!(
            Grid::from_rows(&empty),
            Err(ConfigError::EmptyGrid { .. })
        ));

        let ragged: Vec<Vec<u8>> = vec![vec![1, 2], vec![3]];
        assert!(matches!(
            Grid::from_rows(&ragged),
            Err(ConfigError::RaggedGrid { row: 1, len: 1, expected: 2 })
        ));
    }

    #[test]
    fn test_deserialize_checks_cell_count() {
        let grid = Grid::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);

        let short = r#"{"rows":5,"cols":5,"cells":[]}"#;
        let err = serde_json::from_str::<Grid>(short).unwrap_err();
        assert!(err.to_string().contains("grid holds 0 cells, expected 25"));

        let empty = r#"{"rows":0,"cols":3,"cells":[]}"#;
        assert!(serde_json::from_str::<Grid>(empty).is_err());

        let overflow = format!(r#"{{"rows":{},"cols":2,"cells":[]}}"#, usize::MAX);
        assert!(serde_json::from_str::<Grid>(&overflow).is_err());
    }

    #[test]
    fn test_take() {
        let mut grid = Grid::from_rows(&[[1u8, 2], [3, 4]]).unwrap();

        assert_eq!(grid.take(0, 1), Some(2));
        assert_eq!(grid.get(0, 1), Some(Cell::Used));
        assert_eq!(grid.used_count(), 1);

        // Already used
        assert_eq!(grid.take(0, 1), None);
        // Out of bounds
        assert_eq!(grid.take(5, 0), None);
        assert_eq!(grid.used_count(), 1);
    }

    #[test]
    fn test_row_iter() {
        let mut grid = Grid::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
        grid.take(1, 0);
        let row: Vec<_> = grid.row(1).collect();
        assert_eq!(row, vec![Cell::Used, Cell::Value(4)]);
        assert_eq!(grid.row(9).count(), 0);
    }
}
