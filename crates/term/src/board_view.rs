//! BoardView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. Besides drawing, it
//! owns the board-to-screen layout, so it also answers the inverse question:
//! which board cell sits under a given terminal position (`hit_test`), which
//! is what makes mouse dragging work.

use crate::core::GameState;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{BoardConfig, Coord};

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

/// Session numbers shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudInfo {
    pub seed: u32,
    /// Dots removed by the most recent clear.
    pub last_clear: u32,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SELECTED_BG: Rgb = Rgb::new(60, 60, 95);
const CURSOR_BG: Rgb = Rgb::new(90, 90, 120);

const KIND_COLORS: [Rgb; 8] = [
    Rgb::new(80, 220, 220),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(100, 220, 120),
    Rgb::new(220, 80, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(255, 165, 0),
    Rgb::new(230, 230, 230),
];

/// A lightweight terminal renderer for the dots board.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        // hit_test divides by the cell size.
        debug_assert!(cell_w > 0 && cell_h > 0, "cell size must be nonzero");
        Self { cell_w, cell_h }
    }

    /// Top-left corner of the board frame, centered in the viewport.
    fn origin(&self, config: BoardConfig, viewport: Viewport) -> (u16, u16) {
        let frame_w = (config.width as u16) * self.cell_w + 2;
        let frame_h = (config.height as u16) * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        (start_x, start_y)
    }

    /// The board cell under terminal position `(x, y)`, if any.
    ///
    /// Uses the same layout as [`render_into`](Self::render_into): the border
    /// and everything outside the frame miss. Screen rows run top-down while
    /// board rows run bottom-up, so the mapping flips the row.
    pub fn hit_test(
        &self,
        config: BoardConfig,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<Coord> {
        let (start_x, start_y) = self.origin(config, viewport);
        let px = x.checked_sub(start_x + 1)?;
        let py = y.checked_sub(start_y + 1)?;

        let col = px / self.cell_w;
        let screen_row = py / self.cell_h;
        if col >= config.width as u16 || screen_row >= config.height as u16 {
            return None;
        }
        let row = config.height as u16 - 1 - screen_row;
        Some(Coord::new(row as u8, col as u8))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        game: &GameState,
        cursor: Coord,
        hud: &HudInfo,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let board = game.board();
        let config = board.config();
        let (start_x, start_y) = self.origin(config, viewport);
        let board_px_w = (config.width as u16) * self.cell_w;
        let board_px_h = (config.height as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let bg = Style {
            fg: Rgb::new(80, 80, 90),
            bg: BOARD_BG,
            bold: false,
            dim: false,
        };
        let border = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for the play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Dots, with the selection and the cursor as background highlights.
        for row in 0..config.height {
            for col in 0..config.width {
                let at = Coord::new(row, col);
                let mut style = match board.get(at) {
                    Some(dot) => Style {
                        fg: KIND_COLORS[dot.kind().index() % KIND_COLORS.len()],
                        bg: BOARD_BG,
                        bold: false,
                        dim: false,
                    },
                    None => Style {
                        fg: Rgb::new(90, 90, 100),
                        bg: BOARD_BG,
                        bold: false,
                        dim: true,
                    },
                };
                if game.selector().contains(at) {
                    style.bg = SELECTED_BG;
                    style.bold = true;
                }
                if at == cursor {
                    style.bg = CURSOR_BG;
                    style.bold = true;
                }

                let ch = if board.get(at).is_some() { '●' } else { '·' };
                self.draw_cell(fb, start_x, start_y, config.height, at, ch, style);
            }
        }

        // Side panel (session numbers and keys).
        self.draw_side_panel(fb, game, hud, viewport, start_x, start_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        game: &GameState,
        cursor: Coord,
        hud: &HudInfo,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, cursor, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Paint one board cell; board row 0 lands on the lowest screen row.
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        board_h: u8,
        at: Coord,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + (at.col as u16) * self.cell_w;
        let py = start_y + 1 + ((board_h - 1 - at.row) as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &GameState,
        hud: &HudInfo,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let dim = Style { dim: true, ..value };

        let board = game.board();
        let mut y = start_y;
        fb.put_str(panel_x, y, "SIZE", label);
        y = y.saturating_add(1);
        let w = fb.put_u32(panel_x, y, board.width() as u32, value);
        fb.put_char(panel_x + w, y, 'x', value);
        fb.put_u32(panel_x + w + 1, y, board.height() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KINDS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, board.kinds() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.seed, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PATH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, game.selector().len() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LAST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.last_clear, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in [
            "arrows move",
            "space  touch",
            "enter  clear",
            "esc    back",
            "q      quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameState};

    fn small_game() -> GameState {
        GameState::from_board(Board::from_rows(&["01", "23"], 4, 1))
    }

    #[test]
    fn test_hit_test_round_trips_every_cell() {
        let view = BoardView::default();
        let config = BoardConfig::default();
        let viewport = Viewport::new(40, 20);
        let (start_x, start_y) = view.origin(config, viewport);

        for row in 0..config.height {
            for col in 0..config.width {
                let px = start_x + 1 + (col as u16) * 2;
                let py = start_y + 1 + ((config.height - 1 - row) as u16);
                let expect = Some(Coord::new(row, col));
                assert_eq!(view.hit_test(config, viewport, px, py), expect);
                // Both columns of the double-wide cell hit.
                assert_eq!(view.hit_test(config, viewport, px + 1, py), expect);
            }
        }
    }

    #[test]
    fn test_hit_test_misses_border_and_outside() {
        let view = BoardView::default();
        let config = BoardConfig::default();
        let viewport = Viewport::new(40, 20);
        let (start_x, start_y) = view.origin(config, viewport);

        assert_eq!(view.hit_test(config, viewport, start_x, start_y), None);
        assert_eq!(view.hit_test(config, viewport, 0, 0), None);
        assert_eq!(view.hit_test(config, viewport, 39, 19), None);
    }

    #[test]
    fn test_render_draws_rows_top_down() {
        let view = BoardView::default();
        let game = small_game();
        let viewport = Viewport::new(30, 10);
        let config = game.board().config();
        let (start_x, start_y) = view.origin(config, viewport);

        let fb = view.render(&game, Coord::new(0, 1), &HudInfo::default(), viewport);

        // Top-left inner glyph is the top board row (row 1), kind 0.
        let top_left = fb.get(start_x + 1, start_y + 1).unwrap();
        assert_eq!(top_left.ch, '●');
        assert_eq!(top_left.style.fg, KIND_COLORS[0]);

        // One screen row below sits board row 0, kind 2.
        let bottom_left = fb.get(start_x + 1, start_y + 2).unwrap();
        assert_eq!(bottom_left.style.fg, KIND_COLORS[2]);
    }

    #[test]
    fn test_selection_and_cursor_highlights() {
        let view = BoardView::default();
        let mut game = GameState::from_board(Board::from_rows(&["00", "00"], 1, 1));
        game.touch(Coord::new(1, 0));
        game.touch(Coord::new(1, 1));

        let viewport = Viewport::new(30, 10);
        let config = game.board().config();
        let (start_x, start_y) = view.origin(config, viewport);
        let cursor = Coord::new(0, 0);
        let fb = view.render(&game, cursor, &HudInfo::default(), viewport);

        // Selected top-left cell.
        let selected = fb.get(start_x + 1, start_y + 1).unwrap();
        assert_eq!(selected.style.bg, SELECTED_BG);
        assert!(selected.style.bold);

        // Cursor on the unselected bottom-left cell.
        let under_cursor = fb.get(start_x + 1, start_y + 2).unwrap();
        assert_eq!(under_cursor.style.bg, CURSOR_BG);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "cell size")]
    fn test_zero_cell_size_is_rejected() {
        BoardView::new(2, 0);
    }

    #[test]
    fn test_render_survives_tiny_viewports() {
        let view = BoardView::default();
        let game = small_game();
        let mut fb = FrameBuffer::new(0, 0);
        for (w, h) in [(0, 0), (1, 1), (3, 2), (8, 3)] {
            view.render_into(
                &game,
                Coord::new(0, 0),
                &HudInfo::default(),
                Viewport::new(w, h),
                &mut fb,
            );
        }
    }
}
