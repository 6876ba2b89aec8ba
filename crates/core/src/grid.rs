//! Grid module - the NxN tile matrix and the slide/merge rules
//!
//! Cells are stored in a flat vector, row-major (`row * size + col`).
//! Every move is reduced to the canonical left move on each row:
//!
//! - right = invert, left, invert
//! - up    = transpose, left, transpose
//! - down  = transpose, right, transpose
//!
//! `transpose` and `invert` are their own inverses, so each move leaves the
//! grid in its original orientation. The `can_move_*` predicates use the same
//! orientation and agree exactly with whether the move would change the grid.

use std::fmt;

use crate::config::{check_size, ConfigError};
use crate::rng::TileRng;
use crate::types::{Direction, Tile, INITIAL_TILES};

/// Result of applying one directional move to the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether any cell changed
    pub changed: bool,
    /// Sum of all tiles produced by merges during this move
    pub score: u64,
}

/// Compact non-zero tiles to the front of the row, preserving order.
pub fn tighten(row: &mut [Tile]) {
    let mut write = 0;
    for read in 0..row.len() {
        let value = row[read];
        if value != 0 {
            row[write] = value;
            write += 1;
        }
    }
    for cell in &mut row[write..] {
        *cell = 0;
    }
}

/// Merge adjacent equal tiles, scanning left to right.
///
/// The left cell takes the sum and the right cell is cleared and skipped, so a
/// tile merges at most once per move. Returns the sum of the merged tiles.
pub fn merge(row: &mut [Tile]) -> u64 {
    let mut score = 0;
    let mut i = 0;
    while i + 1 < row.len() {
        if row[i] != 0 && row[i] == row[i + 1] {
            row[i] *= 2;
            row[i + 1] = 0;
            score += row[i];
            i += 2;
        } else {
            i += 1;
        }
    }
    score
}

/// Slide one row to the left: tighten, merge, tighten.
pub fn move_row_left(row: &mut [Tile]) -> u64 {
    tighten(row);
    let score = merge(row);
    tighten(row);
    score
}

/// Whether a left move would change this row.
///
/// True when some empty cell has a tile to its right, or two adjacent tiles
/// are equal.
pub fn row_is_left_movable(row: &[Tile]) -> bool {
    row.windows(2)
        .any(|pair| (pair[0] == 0 && pair[1] != 0) || (pair[0] != 0 && pair[0] == pair[1]))
}

/// The game grid - `size` x `size` tiles, row-major flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid. Sizes are validated by `GameConfig`; this only asserts.
    pub fn new(size: usize) -> Self {
        assert!(
            check_size(size).is_ok(),
            "grid size {size} must be validated before construction"
        );
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Create a grid with the two initial tiles already spawned.
    pub fn with_spawns(size: usize, rng: &mut TileRng) -> Self {
        let mut grid = Self::new(size);
        grid.reset(rng);
        grid
    }

    /// Build a grid from explicit rows.
    ///
    /// Rows must form a square of a supported size, and every value must be
    /// 0 or a power of two >= 2.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, ConfigError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(ConfigError::NotSquare {
                    row: r,
                    len: row.len(),
                    size,
                });
            }
            for (c, value) in row.into_iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(ConfigError::InvalidTile {
                        row: r,
                        col: c,
                        value,
                    });
                }
                cells.push(value);
            }
        }
        Ok(Self { size, cells })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get tile at (row, col), `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Copy out as nested rows
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.size).map(<[Tile]>::to_vec).collect()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Clear every cell and spawn the initial tiles.
    pub fn reset(&mut self, rng: &mut TileRng) {
        self.cells.fill(0);
        for _ in 0..INITIAL_TILES {
            self.spawn(rng);
        }
    }

    /// Place a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
    ///
    /// Returns the `(row, col)` that received the tile.
    ///
    /// # Panics
    ///
    /// Panics when the grid has no empty cell. The controller only spawns
    /// after a move that changed the grid, which always leaves a hole.
    pub fn spawn(&mut self, rng: &mut TileRng) -> (usize, usize) {
        let value = rng.tile_value();
        let empty: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect();
        assert!(!empty.is_empty(), "spawn called on a full grid");

        let idx = empty[rng.range(empty.len())];
        self.cells[idx] = value;
        (idx / self.size, idx % self.size)
    }

    /// Swap rows and columns in place.
    pub fn transpose(&mut self) {
        for r in 0..self.size {
            for c in (r + 1)..self.size {
                let a = self.index(r, c);
                let b = self.index(c, r);
                self.cells.swap(a, b);
            }
        }
    }

    /// Reverse every row in place.
    pub fn invert(&mut self) {
        for row in self.cells.chunks_mut(self.size) {
            row.reverse();
        }
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        let before = self.cells.clone();
        let score = self.cells.chunks_mut(self.size).map(move_row_left).sum();
        MoveOutcome {
            changed: before != self.cells,
            score,
        }
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.invert();
        let outcome = self.move_left();
        self.invert();
        outcome
    }

    pub fn move_up(&mut self) -> MoveOutcome {
        self.transpose();
        let outcome = self.move_left();
        self.transpose();
        outcome
    }

    pub fn move_down(&mut self) -> MoveOutcome {
        self.transpose();
        let outcome = self.move_right();
        self.transpose();
        outcome
    }

    /// Apply a move in the given direction.
    pub fn apply(&mut self, dir: Direction) -> MoveOutcome {
        match dir {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
        }
    }

    pub fn can_move_left(&self) -> bool {
        self.cells.chunks(self.size).any(row_is_left_movable)
    }

    pub fn can_move_right(&self) -> bool {
        let mut oriented = self.clone();
        oriented.invert();
        oriented.can_move_left()
    }

    pub fn can_move_up(&self) -> bool {
        let mut oriented = self.clone();
        oriented.transpose();
        oriented.can_move_left()
    }

    pub fn can_move_down(&self) -> bool {
        let mut oriented = self.clone();
        oriented.transpose();
        oriented.can_move_right()
    }

    /// Whether moving in `dir` would change the grid.
    pub fn can_move(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.can_move_up(),
            Direction::Down => self.can_move_down(),
            Direction::Left => self.can_move_left(),
            Direction::Right => self.can_move_right(),
        }
    }

    /// Whether any direction can still change the grid.
    pub fn can_move_any(&self) -> bool {
        Direction::ALL.iter().any(|&dir| self.can_move(dir))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v:>5}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
