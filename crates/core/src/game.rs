//! Game module - the turn-based state machine around the grid
//!
//! ```text
//! Init ──reset──▶ Playing ──move──▶ Playing
//!                   │  │  └─win──▶ Win  ──Restart──▶ Init
//!                   │  └─stuck──▶ Over  ──Restart──▶ Init
//!                   └──Exit──▶ Exit ◀──Exit── Win / Over
//! ```
//!
//! Win and Over only accept Restart or Exit; every other action is ignored.

use log::{debug, info};

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Action, Direction};

/// Session state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the reset entry action
    Init,
    /// Accepting moves
    Playing,
    /// Win tile reached
    Win,
    /// No move left
    Over,
    /// Loop should end
    Exit,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Init => "init",
            Phase::Playing => "playing",
            Phase::Win => "win",
            Phase::Over => "over",
            Phase::Exit => "exit",
        }
    }
}

/// Complete game state: grid, score, flags and the current phase.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    rng: TileRng,
    score: u64,
    best_score: u64,
    win: bool,
    over: bool,
    phase: Phase,
}

impl Game {
    /// Create a game in [`Phase::Init`]. The grid is filled on the first reset.
    pub fn new(config: GameConfig, rng: TileRng) -> Self {
        Self {
            grid: Grid::new(config.size()),
            config,
            rng,
            score: 0,
            best_score: 0,
            win: false,
            over: false,
            phase: Phase::Init,
        }
    }

    /// Start directly in [`Phase::Playing`] on a given grid.
    ///
    /// The grid size wins over `config.size()` and is kept on restart. Useful
    /// for scripted scenarios.
    pub fn from_grid(config: GameConfig, grid: Grid, rng: TileRng) -> Self {
        Self {
            config: config.with_size(grid.size()),
            grid,
            rng,
            score: 0,
            best_score: 0,
            win: false,
            over: false,
            phase: Phase::Playing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Highest score seen since the process started (kept across restarts).
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_win(&self) -> bool {
        self.win
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Init entry action: fresh grid with two tiles, zero score, cleared flags.
    pub fn reset(&mut self) {
        self.grid = Grid::with_spawns(self.config.size(), &mut self.rng);
        self.score = 0;
        self.win = false;
        self.over = false;
        self.set_phase(Phase::Playing);
    }

    /// Process one action and return the resulting phase.
    ///
    /// A pending [`Phase::Init`] is resolved first, so the action is applied to
    /// the fresh board.
    pub fn handle(&mut self, action: Action) -> Phase {
        if self.phase == Phase::Init {
            self.reset();
        }

        let next = match (self.phase, action) {
            (Phase::Exit, _) => Phase::Exit,
            (_, Action::Exit) => Phase::Exit,
            (_, Action::Restart) => Phase::Init,
            (Phase::Playing, _) => match action.direction() {
                Some(dir) => self.play(dir),
                None => Phase::Playing,
            },
            // Win / Over ignore everything except Restart and Exit.
            (phase, _) => phase,
        };
        self.set_phase(next);
        next
    }

    fn play(&mut self, dir: Direction) -> Phase {
        if !self.grid.can_move(dir) {
            debug!("move {} ignored: grid would not change", dir.as_str());
            return Phase::Playing;
        }

        let outcome = self.grid.apply(dir);
        assert!(
            outcome.changed,
            "move {} reported movable but left the grid unchanged",
            dir.as_str()
        );
        self.score += outcome.score;
        self.best_score = self.best_score.max(self.score);

        let (row, col) = self.grid.spawn(&mut self.rng);
        debug!(
            "move {} scored {} (total {}), spawned at ({}, {})",
            dir.as_str(),
            outcome.score,
            self.score,
            row,
            col
        );

        if self.grid.max_tile() >= self.config.win_tile() {
            self.win = true;
            Phase::Win
        } else if !self.grid.can_move_any() {
            self.over = true;
            Phase::Over
        } else {
            Phase::Playing
        }
    }

    fn set_phase(&mut self, next: Phase) {
        if next != self.phase {
            info!(
                "phase {} -> {} (score {})",
                self.phase.as_str(),
                next.as_str(),
                self.score
            );
            self.phase = next;
        }
    }

    /// Owned copy of the render-facing state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.grid.size(),
            cells: self.grid.cells().to_vec(),
            score: self.score,
            best_score: self.best_score,
            win: self.win,
            over: self.over,
        }
    }
}
