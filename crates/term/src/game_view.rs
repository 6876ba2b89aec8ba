//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! ```text
//! SCORE: 36   BEST: 120
//! ┌──────┬──────┬──────┬──────┐
//! │  2   │      │      │  4   │
//! ├──────┼──────┼──────┼──────┤
//! ...
//! └──────┴──────┴──────┴──────┘
//! (W)Up (S)Down (A)Left (D)Right
//!       (R)Restart  (Q)Exit
//! ```

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Tile, BANNER_OVER, BANNER_WIN, HELP_MOVE, HELP_RESTART};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Draw from the top-left corner
    TopLeft,
    /// Centre the whole block in the viewport
    Center,
}

/// Terminal view of the 2048 board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Inner width of one grid cell in columns.
    cell_w: u16,
    anchor: Anchor,
}

impl Default for GameView {
    fn default() -> Self {
        // Six columns fit every tile up to 131072.
        Self {
            cell_w: 6,
            anchor: Anchor::TopLeft,
        }
    }
}

const FRAME: CellStyle = CellStyle::new(Rgb::new(187, 173, 160), Rgb::new(0, 0, 0));
const EMPTY: CellStyle = CellStyle::new(Rgb::new(120, 110, 100), Rgb::new(40, 36, 33));
const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
const BANNER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

impl GameView {
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Columns and rows needed to draw a board of `size` x `size`, including
    /// the fixed status and help lines under the table.
    pub fn block_size(&self, size: usize) -> (u16, u16) {
        let n = size as u16;
        let width = (n * (self.cell_w + 1) + 1).max(text_width());
        // score + table (2n + 1) + status + help
        let height = 2 * n + 4;
        (width, height)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (block_w, block_h) = self.block_size(snap.size);
        let (ox, oy) = match self.anchor {
            Anchor::TopLeft => (0, 0),
            Anchor::Center => (
                viewport.width.saturating_sub(block_w) / 2,
                viewport.height.saturating_sub(block_h) / 2,
            ),
        };

        fb.put_str(ox, oy, &score_line(snap), TEXT.bold());
        self.draw_table(fb, snap, ox, oy + 1);

        let status_y = oy + 2 * snap.size as u16 + 2;
        let status_style = if snap.playable() { TEXT } else { BANNER };
        fb.put_str(ox, status_y, snap.status_line(), status_style);
        fb.put_str(ox, status_y + 1, HELP_RESTART, TEXT);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_table(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let n = snap.size;
        for r in 0..n {
            let top = y + 2 * r as u16;
            let (left, mid, right) = if r == 0 {
                ('┌', '┬', '┐')
            } else {
                ('├', '┼', '┤')
            };
            self.draw_rule(fb, x, top, n, left, mid, right);
            self.draw_row(fb, snap.row(r), x, top + 1);
        }
        self.draw_rule(fb, x, y + 2 * n as u16, n, '└', '┴', '┘');
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_rule(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        n: usize,
        left: char,
        mid: char,
        right: char,
    ) {
        fb.put_char(x, y, left, FRAME);
        let mut cx = x + 1;
        for c in 0..n {
            fb.fill_rect(cx, y, self.cell_w, 1, '─', FRAME);
            cx += self.cell_w;
            fb.put_char(cx, y, if c + 1 == n { right } else { mid }, FRAME);
            cx += 1;
        }
    }

    fn draw_row(&self, fb: &mut FrameBuffer, row: &[Tile], x: u16, y: u16) {
        fb.put_char(x, y, '│', FRAME);
        let mut cx = x + 1;
        for &value in row {
            let style = tile_style(value);
            fb.fill_rect(cx, y, self.cell_w, 1, ' ', style);
            if value != 0 {
                fb.put_centered(cx, y, self.cell_w, &value.to_string(), style);
            }
            cx += self.cell_w;
            fb.put_char(cx, y, '│', FRAME);
            cx += 1;
        }
    }
}

/// Widest of the fixed lines drawn below the table.
fn text_width() -> u16 {
    [HELP_MOVE, HELP_RESTART, BANNER_WIN, BANNER_OVER]
        .iter()
        .map(|line| line.chars().count() as u16)
        .max()
        .unwrap_or(0)
}

fn score_line(snap: &GameSnapshot) -> String {
    if snap.best_score > snap.score {
        format!("SCORE: {}   BEST: {}", snap.score, snap.best_score)
    } else {
        format!("SCORE: {}", snap.score)
    }
}

/// Fixed palette keyed by tile exponent.
fn tile_style(value: Tile) -> CellStyle {
    if value == 0 {
        return EMPTY;
    }
    let dark = Rgb::new(119, 110, 101);
    let light = Rgb::new(249, 246, 242);
    let (fg, bg) = match value.trailing_zeros() {
        1 => (dark, Rgb::new(238, 228, 218)),
        2 => (dark, Rgb::new(237, 224, 200)),
        3 => (light, Rgb::new(242, 177, 121)),
        4 => (light, Rgb::new(245, 149, 99)),
        5 => (light, Rgb::new(246, 124, 95)),
        6 => (light, Rgb::new(246, 94, 59)),
        7 => (light, Rgb::new(237, 207, 114)),
        8 => (light, Rgb::new(237, 204, 97)),
        9 => (light, Rgb::new(237, 200, 80)),
        10 => (light, Rgb::new(237, 197, 63)),
        11 => (light, Rgb::new(237, 194, 46)),
        _ => (light, Rgb::new(60, 58, 50)),
    };
    CellStyle::new(fg, bg).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(cells: Vec<Tile>) -> GameSnapshot {
        let size = (cells.len() as f64).sqrt() as usize;
        GameSnapshot {
            size,
            cells,
            score: 0,
            best_score: 0,
            win: false,
            over: false,
        }
    }

    #[test]
    fn block_size_matches_drawn_rows() {
        let view = GameView::default();
        // Help line is 30 wide, one more than a 4x4 table.
        assert_eq!(view.block_size(4), (30, 12));
        assert_eq!(view.block_size(2), (30, 8));
        assert_eq!(view.block_size(6), (43, 16));
    }

    #[test]
    fn tile_styles_differ_by_value() {
        assert_eq!(tile_style(0), EMPTY);
        assert_ne!(tile_style(2), tile_style(4));
        assert_eq!(tile_style(1 << 20), tile_style(1 << 21));
        assert!(tile_style(2048).bold);
    }

    #[test]
    fn best_score_only_shown_when_ahead() {
        let mut s = snap(vec![0; 4]);
        s.score = 12;
        s.best_score = 12;
        assert_eq!(score_line(&s), "SCORE: 12");
        s.best_score = 40;
        assert_eq!(score_line(&s), "SCORE: 12   BEST: 40");
    }
}
