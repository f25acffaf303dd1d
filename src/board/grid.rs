//! Validated letter grids and king-move adjacency.
//!
//! Callers hand grids around as rows of tile strings (`Vec<Vec<String>>`),
//! which is also how boards are displayed. [`Grid`] is the checked form
//! the solver works on: non-empty, square, every tile alphabetic,
//! everything lowercased and stored row-major. Any square size solves;
//! the 3..=10 range only bounds board generation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoggleError, Result};

/// Neighbour list for one cell. Interior cells have exactly eight.
pub type Neighbors = SmallVec<[usize; 8]>;

/// A cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index into a grid of the given size.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Whether two cells touch horizontally, vertically or diagonally.
    ///
    /// A cell is not adjacent to itself.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A validated, lowercased N x N grid of tiles.
///
/// Serializes as rows; deserializing re-runs validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<String>>", try_from = "Vec<Vec<String>>")]
pub struct Grid {
    size: usize,
    tiles: Vec<String>,
}

impl Grid {
    /// Validate caller rows and build a grid.
    ///
    /// Fails if the grid is empty, not square, or any tile is empty or
    /// contains a non-alphabetic character.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(BoggleError::EmptyGrid);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(BoggleError::NotSquare {
                    row,
                    expected: size,
                    found: cells.len(),
                });
            }
        }

        let mut tiles = Vec::with_capacity(size * size);
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let tile = cell.as_ref();
                if !is_valid_tile(tile) {
                    return Err(BoggleError::InvalidTile {
                        row,
                        col,
                        tile: tile.to_string(),
                    });
                }
                tiles.push(tile.to_lowercase());
            }
        }

        Ok(Self { size, tiles })
    }

    /// Rebuild a grid from its row-major cells.
    pub fn from_flat<S: AsRef<str>>(cells: &[S], size: usize) -> Result<Self> {
        let rows = unflatten(cells, size)?;
        Self::from_rows(&rows)
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Lowercased tile at a row-major index.
    #[must_use]
    pub fn tile(&self, index: usize) -> &str {
        &self.tiles[index]
    }

    /// Lowercased tile at a position, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&str> {
        if pos.row < self.size && pos.col < self.size {
            Some(&self.tiles[pos.index(self.size)])
        } else {
            None
        }
    }

    /// Row-major tiles.
    #[must_use]
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Tiles as rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.tiles.chunks(self.size).map(<[String]>::to_vec).collect()
    }

    /// In-bounds king-move neighbours of the cell at `index`.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> Neighbors {
        let pos = Position::from_index(index, self.size);
        let mut out = Neighbors::new();
        for row in pos.row.saturating_sub(1)..=(pos.row + 1).min(self.size - 1) {
            for col in pos.col.saturating_sub(1)..=(pos.col + 1).min(self.size - 1) {
                if row != pos.row || col != pos.col {
                    out.push(Position::new(row, col).index(self.size));
                }
            }
        }
        out
    }

    /// Neighbour lists for every cell, indexed row-major.
    #[must_use]
    pub fn adjacency(&self) -> Vec<Neighbors> {
        (0..self.cell_count()).map(|i| self.neighbors(i)).collect()
    }
}

impl From<Grid> for Vec<Vec<String>> {
    fn from(grid: Grid) -> Self {
        grid.rows()
    }
}

impl TryFrom<Vec<Vec<String>>> for Grid {
    type Error = BoggleError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

/// A tile is one or more alphabetic characters.
fn is_valid_tile(tile: &str) -> bool {
    !tile.is_empty() && tile.chars().all(char::is_alphabetic)
}

/// Flatten rows into row-major cells for storage.
pub fn flatten<S: Clone>(rows: &[Vec<S>]) -> Result<Vec<S>> {
    if rows.is_empty() {
        return Err(BoggleError::EmptyGrid);
    }
    Ok(rows.iter().flatten().cloned().collect())
}

/// Split row-major cells back into `size` rows of `size` cells.
///
/// Cells past `size * size` are ignored.
pub fn unflatten<S: AsRef<str>>(cells: &[S], size: usize) -> Result<Vec<Vec<String>>> {
    if size == 0 {
        return Err(BoggleError::EmptyGrid);
    }
    let expected = size * size;
    if cells.len() < expected {
        return Err(BoggleError::IncompleteGrid {
            expected,
            found: cells.len(),
        });
    }
    Ok(cells[..expected]
        .chunks(size)
        .map(|row| row.iter().map(|c| c.as_ref().to_string()).collect())
        .collect())
}
