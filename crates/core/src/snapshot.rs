use crate::types::{Tile, BANNER_OVER, BANNER_WIN, HELP_MOVE};

/// Read-only copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major copy of the grid
    pub cells: Vec<Tile>,
    pub score: u64,
    pub best_score: u64,
    pub win: bool,
    pub over: bool,
}

impl GameSnapshot {
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row * self.size + col]
    }

    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Win banner, else game-over banner, else the move help.
    pub fn status_line(&self) -> &'static str {
        if self.win {
            BANNER_WIN
        } else if self.over {
            BANNER_OVER
        } else {
            HELP_MOVE
        }
    }

    pub fn playable(&self) -> bool {
        !self.win && !self.over
    }
}
