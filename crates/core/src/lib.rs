//! Core game logic module - the 2048 engine and its controller
//!
//! This crate contains the grid rules, the game state machine and the
//! collaborator traits the terminal front end plugs into. It does no I/O of its
//! own, which keeps it:
//!
//! - **Deterministic**: a seeded [`TileRng`] replays the same spawns
//! - **Testable**: scenarios can start from an explicit [`Grid`]
//! - **Portable**: input and rendering are traits ([`ActionSource`], [`Render`])
//!
//! # Module Structure
//!
//! - [`grid`]: NxN tile matrix, slide/merge rules and movability predicates
//! - [`game`]: turn-based state machine (init, playing, win, over, exit)
//! - [`controller`]: blocking main loop over the collaborator traits
//! - [`snapshot`]: owned, read-only view handed to the renderer
//! - [`rng`]: seedable spawn randomness
//! - [`config`]: validated settings and startup errors
//!
//! # Game Rules
//!
//! - Each move slides every row or column towards one edge; equal neighbours
//!   merge once per move, leftmost pair first in the direction of travel.
//! - Each merge adds the merged tile to the score.
//! - A move that changes the board spawns one tile: 2 (90%) or 4 (10%).
//! - Reaching the win tile (default 2048) wins; having no changing move loses.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Game, GameConfig, Grid, Phase, TileRng};
//! use tui_2048_types::Action;
//!
//! let grid = Grid::from_rows(vec![
//!     vec![2, 2, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 4],
//! ])
//! .unwrap();
//! let mut game = Game::from_grid(GameConfig::default(), grid, TileRng::new(7));
//!
//! assert_eq!(game.handle(Action::Left), Phase::Playing);
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.grid().get(0, 0), Some(4));
//! ```

pub mod config;
pub mod controller;
pub mod game;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use controller::{run, ActionSource, Render};
pub use game::{Game, Phase};
pub use grid::{merge, move_row_left, row_is_left_movable, tighten, Grid, MoveOutcome};
pub use rng::TileRng;
pub use snapshot::GameSnapshot;
