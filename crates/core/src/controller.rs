//! Controller loop and the collaborator seams it drives.
//!
//! The loop is single-threaded and blocking: draw, wait for one action, apply
//! it, repeat until the game reaches [`Phase::Exit`].

use anyhow::Result;
use log::debug;

use crate::game::{Game, Phase};
use crate::snapshot::GameSnapshot;
use crate::types::Action;

/// Blocking source of player actions.
pub trait ActionSource {
    /// Wait until a recognised action is available.
    fn next_action(&mut self) -> Result<Action>;
}

/// Frame sink for the current game state.
pub trait Render {
    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

impl<T: ActionSource + ?Sized> ActionSource for &mut T {
    fn next_action(&mut self) -> Result<Action> {
        (**self).next_action()
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).draw(snapshot)
    }
}

/// Run the game until the player exits.
///
/// Init is resolved without drawing; Playing, Win and Over each draw once and
/// then block on the next action.
pub fn run<I, R>(game: &mut Game, mut input: I, mut render: R) -> Result<()>
where
    I: ActionSource,
    R: Render,
{
    loop {
        match game.phase() {
            Phase::Exit => return Ok(()),
            Phase::Init => game.reset(),
            Phase::Playing | Phase::Win | Phase::Over => {
                render.draw(&game.snapshot())?;
                let action = input.next_action()?;
                debug!("action {}", action.as_str());
                game.handle(action);
            }
        }
    }
}
