//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The game is turn-based, so every draw is a full redraw: clear, then print
//! the whole frame. Commands are encoded into a reusable buffer first and
//! written to stdout in one go.

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::{GameSnapshot, Render};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{Anchor, GameView, Viewport};

/// Fallback when the terminal cannot report its size.
const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: GameView,
    fb: FrameBuffer,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_view(GameView::default().with_anchor(Anchor::Center))
    }

    pub fn with_view(view: GameView) -> Self {
        Self {
            stdout: io::stdout(),
            view,
            fb: FrameBuffer::new(0, 0),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Clear the screen and print `fb`.
    pub fn draw_frame(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_full_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for TerminalRenderer {
    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let (w, h) = viewport_or_default(terminal::size());
        let mut fb = std::mem::replace(&mut self.fb, FrameBuffer::new(0, 0));
        self.view.render_into(snapshot, Viewport::new(w, h), &mut fb);
        let result = self.draw_frame(&fb);
        self.fb = fb;
        result
    }
}

fn viewport_or_default(size: io::Result<(u16, u16)>) -> (u16, u16) {
    size.unwrap_or_else(|err| {
        debug!("terminal size unavailable ({}), using {:?}", err, DEFAULT_VIEWPORT);
        DEFAULT_VIEWPORT
    })
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
