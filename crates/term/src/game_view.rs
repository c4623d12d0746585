//! GameView: maps the core render projection into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::RenderSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{cell_row_col, GameStatus, Player, BOARD_SIDE};

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

/// A lightweight terminal renderer for the tic-tac-toe game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 5x3 keeps the cells roughly square on typical terminal glyphs.
        Self {
            cell_w: 5,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Width of the board frame including the grid lines.
    pub fn frame_width(&self) -> u16 {
        BOARD_SIDE as u16 * (self.cell_w + 1) + 1
    }

    /// Height of the board frame including the grid lines.
    pub fn frame_height(&self) -> u16 {
        BOARD_SIDE as u16 * (self.cell_h + 1) + 1
    }

    /// Render one frame: board grid, marks, cursor and winner highlights,
    /// status panel, history list, help footer.
    ///
    /// `cursor` is the UI-side cell selection; pass `None` to draw without
    /// a cursor (e.g. in tests).
    pub fn render(
        &self,
        snap: &RenderSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = self.frame_width();
        let frame_h = self.frame_height();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_grid(&mut fb, start_x, start_y);

        for index in 0..snap.board.cells().len() {
            self.draw_board_cell(&mut fb, snap, cursor, start_x, start_y, index);
        }

        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);
        self.draw_help(&mut fb, viewport, start_x, start_y, frame_h);

        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let step_x = self.cell_w + 1;
        let step_y = self.cell_h + 1;
        let frame_w = self.frame_width();
        let frame_h = self.frame_height();

        // Horizontal lines.
        for line in 0..=BOARD_SIDE as u16 {
            let y = start_y + line * step_y;
            for dx in 0..frame_w {
                fb.put_char(start_x + dx, y, '─', style);
            }
        }
        // Vertical lines.
        for line in 0..=BOARD_SIDE as u16 {
            let x = start_x + line * step_x;
            for dy in 0..frame_h {
                fb.put_char(x, start_y + dy, '│', style);
            }
        }
        // Junctions.
        for row in 0..=BOARD_SIDE as u16 {
            for col in 0..=BOARD_SIDE as u16 {
                let ch = match (row, col) {
                    (0, 0) => '┌',
                    (0, c) if c == BOARD_SIDE as u16 => '┐',
                    (r, 0) if r == BOARD_SIDE as u16 => '└',
                    (r, c) if r == BOARD_SIDE as u16 && c == BOARD_SIDE as u16 => '┘',
                    (0, _) => '┬',
                    (r, _) if r == BOARD_SIDE as u16 => '┴',
                    (_, 0) => '├',
                    (_, c) if c == BOARD_SIDE as u16 => '┤',
                    _ => '┼',
                };
                fb.put_char(start_x + col * step_x, start_y + row * step_y, ch, style);
            }
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &RenderSnapshot,
        cursor: Option<usize>,
        start_x: u16,
        start_y: u16,
        index: usize,
    ) {
        let (row, col) = cell_row_col(index);
        let x0 = start_x + 1 + col as u16 * (self.cell_w + 1);
        let y0 = start_y + 1 + row as u16 * (self.cell_h + 1);

        let on_winning_line = snap
            .winning_line
            .is_some_and(|line| line.contains(&index));
        let under_cursor = cursor == Some(index);

        // Winner highlight beats the cursor.
        let bg = if on_winning_line {
            Rgb::new(30, 120, 50)
        } else if under_cursor {
            Rgb::new(60, 60, 90)
        } else {
            Rgb::new(30, 30, 40)
        };

        fb.fill_rect(x0, y0, self.cell_w, self.cell_h, ' ', CellStyle::new(Rgb::default(), bg));

        let center_x = x0 + self.cell_w / 2;
        let center_y = y0 + self.cell_h / 2;
        match snap.board.get(index).flatten() {
            Some(player) => {
                let fg = if on_winning_line {
                    Rgb::new(255, 255, 255)
                } else {
                    mark_color(player)
                };
                fb.put_char(center_x, center_y, player.mark(), CellStyle::new(fg, bg).bold());
            }
            None => {
                let dot = CellStyle::new(Rgb::new(90, 90, 100), bg).dim();
                fb.put_char(center_x, center_y, '·', dot);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &RenderSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let current = CellStyle::new(Rgb::new(255, 255, 160), Rgb::new(0, 0, 0)).bold();

        let status_style = match snap.status {
            GameStatus::Winner(_) => CellStyle::new(Rgb::new(120, 230, 120), Rgb::new(0, 0, 0)).bold(),
            GameStatus::Tie => CellStyle::new(Rgb::new(230, 200, 120), Rgb::new(0, 0, 0)).bold(),
            GameStatus::InProgress(_) => label,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, &snap.status_text(), status_style);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);

        for (step, entry) in snap.history_labels.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            if step == snap.current_step {
                fb.put_str(panel_x, y, "▸ ", current);
                fb.put_str(panel_x + 2, y, entry, current);
            } else {
                fb.put_str(panel_x + 2, y, entry, value);
            }
            y = y.saturating_add(1);
        }
    }

    fn draw_help(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_h: u16,
    ) {
        let y = start_y.saturating_add(frame_h).saturating_add(1);
        if y >= viewport.height {
            return;
        }
        let style = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0)).dim();
        fb.put_str(
            start_x,
            y,
            "arrows move  enter place  [ ] history  r restart  q quit",
            style,
        );
    }
}

fn mark_color(player: Player) -> Rgb {
    match player {
        Player::X => Rgb::new(80, 220, 220),
        Player::O => Rgb::new(240, 200, 80),
    }
}
