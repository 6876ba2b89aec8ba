//! Terminal 2048 runner (default binary).
//!
//! Parses configuration, takes over the terminal for the duration of the game
//! and runs the controller loop until the player exits.

use anyhow::Result;
use clap::Parser;
use log::info;

use tui_2048::cli::{init_logging, Args};
use tui_2048::core::{run, Game, TileRng};
use tui_2048::input::KeyboardInput;
use tui_2048::term::{TerminalRenderer, TerminalSession};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.game_config()?;
    init_logging(args.log_file.as_deref(), args.log_level)?;
    info!(
        "starting {0}x{0} game, win tile {1}, seed {2:?}",
        config.size(),
        config.win_tile(),
        args.seed
    );

    let mut game = Game::new(config, TileRng::from_seed_opt(args.seed));

    let session = TerminalSession::enter()?;
    let result = run(&mut game, KeyboardInput::new(), TerminalRenderer::new());
    // Always try to restore terminal state before reporting.
    let restored = session.exit();
    result?;
    restored?;

    info!("exit with score {} (best {})", game.score(), game.best_score());
    println!("Final score: {}  Best: {}", game.score(), game.best_score());
    Ok(())
}
