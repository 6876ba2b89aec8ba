//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable from the engine, the input mapping and the terminal view alike.
//!
//! # Grid Dimensions
//!
//! The board is always square:
//!
//! - **Default size**: 4x4
//! - **Supported sizes**: `MIN_GRID_SIZE..=MAX_GRID_SIZE`
//!
//! # Spawn Odds
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_ROLL_RANGE` | 100 | Size of the spawn roll `[0, 100)` |
//! | `SPAWN_FOUR_ABOVE` | 89 | Rolls strictly above this spawn a 4 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Action, Direction, DEFAULT_GRID_SIZE, DEFAULT_WIN_TILE};
//!
//! // Parse an action (case-insensitive)
//! let action = Action::from_str("left").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Left));
//!
//! // Non-directional actions have no direction
//! assert_eq!(Action::Restart.direction(), None);
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! assert_eq!(DEFAULT_WIN_TILE, 2048);
//! ```

/// Value stored in a grid cell. `0` is an empty cell, otherwise a power of two.
pub type Tile = u64;

/// Default board side length (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest supported board side length
pub const MIN_GRID_SIZE: usize = 2;

/// Largest supported board side length
pub const MAX_GRID_SIZE: usize = 8;

/// Default tile value that wins the game
pub const DEFAULT_WIN_TILE: Tile = 2048;

/// Smallest win tile accepted by configuration
pub const MIN_WIN_TILE: Tile = 4;

/// Spawn roll is drawn from `[0, SPAWN_ROLL_RANGE)`
pub const SPAWN_ROLL_RANGE: u32 = 100;

/// Rolls strictly above this value spawn a 4 (roughly 10%)
pub const SPAWN_FOUR_ABOVE: u32 = 89;

/// Number of tiles placed on a freshly reset grid
pub const INITIAL_TILES: usize = 2;

/// Status line shown while playing
pub const HELP_MOVE: &str = "(W)Up (S)Down (A)Left (D)Right";

/// Final line, always shown
pub const HELP_RESTART: &str = "      (R)Restart  (Q)Exit";

/// Status line once the win tile is reached
pub const BANNER_WIN: &str = "Congratulation, YOU WIN!";

/// Status line once no move is left
pub const BANNER_OVER: &str = "             GAME OVER";


/// The four sliding directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the game-over check visits them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// User actions consumed by the game controller, one per turn.
///
/// Produced by the keyboard mapping (or by a scripted source in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Slide tiles up
    Up,
    /// Slide tiles down
    Down,
    /// Slide tiles left
    Left,
    /// Slide tiles right
    Right,
    /// Start a fresh game (score and grid reset)
    Restart,
    /// Leave the game loop
    Exit,
}

impl Action {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Action;
    ///
    /// assert_eq!(Action::from_str("UP"), Some(Action::Up));
    /// assert_eq!(Action::from_str("restart"), Some(Action::Restart));
    /// assert_eq!(Action::from_str("quit"), Some(Action::Exit));
    /// assert_eq!(Action::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Action::Up),
            "down" => Some(Action::Down),
            "left" => Some(Action::Left),
            "right" => Some(Action::Right),
            "restart" => Some(Action::Restart),
            "exit" | "quit" => Some(Action::Exit),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Restart => "restart",
            Action::Exit => "exit",
        }
    }

    /// The sliding direction for directional actions, `None` otherwise.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Action::Up => Some(Direction::Up),
            Action::Down => Some(Direction::Down),
            Action::Left => Some(Direction::Left),
            Action::Right => Some(Direction::Right),
            Action::Restart | Action::Exit => None,
        }
    }
}

impl From<Direction> for Action {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Action::Up,
            Direction::Down => Action::Down,
            Direction::Left => Action::Left,
            Direction::Right => Action::Right,
        }
    }
}
