//! GameView: maps the session state into a terminal framebuffer.
//!
//! This module is pure (no I/O) and owns the board geometry, so it can both
//! draw a cell and answer the inverse question: which board coordinate a
//! mouse click at a given terminal position refers to.

use crate::core::{GameState, Phase};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::toast::{ToastKind, Toasts};
use crate::types::Pos;

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

/// Renders the board, HUD, and toasts; terminal glyphs are taller than they
/// are wide, so one board cell spans several columns.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles near-square and leaves room for two-digit numbers.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

/// Rows reserved above the board for the title and stats lines.
const HUD_TOP_ROWS: u16 = 3;

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Top-left corner of the board frame for a given board size.
    fn board_origin(&self, size: u8, viewport: Viewport) -> (u16, u16) {
        let frame_w = (size as u16) * self.cell_w + 2;
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = HUD_TOP_ROWS;
        (x, y)
    }

    /// Map a terminal position back to a board coordinate, if it falls on a
    /// cell. The inverse of the geometry used by `render_into`.
    pub fn hit_test(&self, size: u8, viewport: Viewport, col: u16, row: u16) -> Option<Pos> {
        let (ox, oy) = self.board_origin(size, viewport);
        // Positions inside the frame, excluding the border.
        let col = col.checked_sub(ox + 1)?;
        let row = row.checked_sub(oy + 1)?;
        let x = col / self.cell_w;
        let y = row / self.cell_h;
        if x < size as u16 && y < size as u16 {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Render the current state into an existing framebuffer, resizing it to
    /// the viewport.
    pub fn render_into(
        &self,
        state: &GameState,
        toasts: &Toasts,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        self.draw_hud(state, viewport, fb);
        self.draw_board(state, viewport, fb);
        self.draw_toasts(state, toasts, viewport, fb);
        self.draw_help(viewport, fb);
    }

    fn draw_hud(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        let title_style = CellStyle {
            fg: Rgb::new(255, 210, 90),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let title = "T U I   F I F T E E N";
        let tx = viewport.width.saturating_sub(title.len() as u16) / 2;
        fb.draw_text(tx, 0, title, title_style);

        let stats = format!(
            "Moves: {}   Level: {}   Best: {}   Board: {}x{}   [{}] music  [{}] sfx",
            state.moves(),
            state.level(),
            if state.high_score() == 0 {
                "-".to_string()
            } else {
                state.high_score().to_string()
            },
            state.board().size(),
            state.board().size(),
            if state.music_enabled() { "on " } else { "off" },
            if state.sfx_enabled() { "on " } else { "off" },
        );
        let sx = viewport.width.saturating_sub(stats.len() as u16) / 2;
        fb.draw_text(sx, 1, &stats, CellStyle::default());
    }

    fn draw_board(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        // The dealt board, not the session's next-deal size: after a growth
        // the two differ until the win pause elapses.
        let size = state.board().size();
        let (ox, oy) = self.board_origin(size, viewport);
        let board_px_w = (size as u16) * self.cell_w;
        let board_px_h = (size as u16) * self.cell_h;
        let solved = matches!(state.phase(), Phase::Solved { .. });

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(fb, ox, oy, board_px_w + 2, board_px_h + 2, border);

        for y in 0..size {
            for x in 0..size {
                let pos = Pos::new(x, y);
                let cx = ox + 1 + (x as u16) * self.cell_w;
                let cy = oy + 1 + (y as u16) * self.cell_h;
                match state.board().get(pos).flatten() {
                    Some(value) => self.draw_tile(fb, cx, cy, value, solved),
                    None => self.draw_empty(fb, cx, cy),
                }
            }
        }

        if solved {
            let style = CellStyle {
                fg: Rgb::new(120, 255, 120),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            };
            let msg = "Solved!";
            let mx = viewport.width.saturating_sub(msg.len() as u16) / 2;
            fb.draw_text(mx, oy + board_px_h + 2, msg, style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, cx: u16, cy: u16, value: u8, solved: bool) {
        let style = if solved {
            CellStyle {
                fg: Rgb::new(10, 40, 10),
                bg: Rgb::new(110, 220, 110),
                bold: true,
            }
        } else {
            CellStyle {
                fg: Rgb::new(240, 240, 250),
                bg: Rgb::new(60, 90, 150),
                bold: true,
            }
        };
        fb.fill_rect(cx, cy, self.cell_w, self.cell_h, ' ', style);

        let label = value.to_string();
        let lx = cx + self.cell_w.saturating_sub(label.len() as u16) / 2;
        let ly = cy + self.cell_h / 2;
        fb.draw_text(lx, ly, &label, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, cx: u16, cy: u16) {
        let style = CellStyle {
            fg: Rgb::new(70, 70, 80),
            bg: Rgb::new(25, 25, 32),
            bold: false,
        };
        fb.fill_rect(cx, cy, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 1..w - 1 {
            fb.set(x + dx, y, style.into_cell('─'));
            fb.set(x + dx, y + h - 1, style.into_cell('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, style.into_cell('│'));
            fb.set(x + w - 1, y + dy, style.into_cell('│'));
        }
        fb.set(x, y, style.into_cell('┌'));
        fb.set(x + w - 1, y, style.into_cell('┐'));
        fb.set(x, y + h - 1, style.into_cell('└'));
        fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));
    }

    fn draw_toasts(
        &self,
        state: &GameState,
        toasts: &Toasts,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let size = state.board().size();
        let (_, oy) = self.board_origin(size, viewport);
        let base = oy + (size as u16) * self.cell_h + 4;

        for (i, toast) in toasts.iter().enumerate() {
            let fg = match toast.kind {
                ToastKind::Info => Rgb::new(150, 200, 255),
                ToastKind::Success => Rgb::new(130, 230, 130),
                ToastKind::Error => Rgb::new(255, 120, 120),
            };
            let style = CellStyle {
                fg,
                bg: Rgb::new(0, 0, 0),
                bold: false,
            };
            let line = format!("{}: {}", toast.title, toast.text);
            let lx = viewport.width.saturating_sub(line.len() as u16) / 2;
            fb.draw_text(lx, base + i as u16, &line, style);
        }
    }

    fn draw_help(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        let style = CellStyle {
            fg: Rgb::new(120, 120, 130),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let help = "arrows/hjkl slide · click tiles · n new game · s shuffle · m music · x sfx · q quit";
        let hx = viewport.width.saturating_sub(help.chars().count() as u16) / 2;
        fb.draw_text(hx, viewport.height.saturating_sub(1), help, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &GameState) -> (GameView, Viewport, FrameBuffer) {
        let view = GameView::default();
        let viewport = Viewport::new(80, 26);
        let mut fb = FrameBuffer::new(1, 1);
        view.render_into(state, &Toasts::new(), viewport, &mut fb);
        (view, viewport, fb)
    }

    fn row_string(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).unwrap().ch)
            .collect()
    }

    #[test]
    fn test_render_fits_viewport() {
        let state = GameState::new(1, 0);
        let (_, viewport, fb) = render(&state);
        assert_eq!(fb.width(), viewport.width);
        assert_eq!(fb.height(), viewport.height);
    }

    #[test]
    fn test_render_shows_every_tile() {
        let state = GameState::new(42, 0);
        let (_, _, fb) = render(&state);

        let screen: String = (0..fb.height())
            .map(|y| row_string(&fb, y))
            .collect::<Vec<_>>()
            .join("\n");
        // Two-digit tiles render both digits; spot-check a few labels.
        for label in ["1", "15", "Moves:"] {
            assert!(screen.contains(label), "missing {label:?} in render");
        }
    }

    #[test]
    fn test_hit_test_roundtrip() {
        let state = GameState::new(7, 0);
        let (view, viewport, _) = render(&state);
        let size = state.size();
        let (ox, oy) = view.board_origin(size, viewport);

        for y in 0..size {
            for x in 0..size {
                // Center of the cell's rectangle.
                let col = ox + 1 + (x as u16) * view.cell_w + view.cell_w / 2;
                let row = oy + 1 + (y as u16) * view.cell_h + view.cell_h / 2;
                assert_eq!(
                    view.hit_test(size, viewport, col, row),
                    Some(Pos::new(x, y))
                );
            }
        }
    }

    #[test]
    fn test_hit_test_outside_board() {
        let state = GameState::new(7, 0);
        let (view, viewport, _) = render(&state);
        let size = state.size();

        assert_eq!(view.hit_test(size, viewport, 0, 0), None);
        assert_eq!(
            view.hit_test(size, viewport, viewport.width - 1, viewport.height - 1),
            None
        );
        // The border itself is not a cell.
        let (ox, oy) = view.board_origin(size, viewport);
        assert_eq!(view.hit_test(size, viewport, ox, oy), None);
    }
}
