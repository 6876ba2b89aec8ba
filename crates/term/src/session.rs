//! Scoped ownership of the terminal display.
//!
//! [`TerminalSession::enter`] switches to raw mode and the alternate screen;
//! dropping the session restores the terminal, so every exit path (normal
//! return, `?` error, unwinding panic) leaves the shell usable.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on the guard owns raw mode, so a failed write below is
        // still undone on drop.
        let session = Self { active: true };

        let mut buf = Vec::new();
        buf.queue(terminal::EnterAlternateScreen)?;
        buf.queue(cursor::Hide)?;
        buf.queue(terminal::DisableLineWrap)?;
        write_now(&buf)?;
        Ok(session)
    }

    /// Restore the terminal now and report any failure.
    pub fn exit(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut buf = Vec::new();
        buf.queue(ResetColor)?;
        buf.queue(SetAttribute(Attribute::Reset))?;
        buf.queue(terminal::EnableLineWrap)?;
        buf.queue(cursor::Show)?;
        buf.queue(terminal::LeaveAlternateScreen)?;
        let written = write_now(&buf);
        terminal::disable_raw_mode()?;
        written
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn write_now(buf: &[u8]) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(buf)?;
    stdout.flush()?;
    Ok(())
}
