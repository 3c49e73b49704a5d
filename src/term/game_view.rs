//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so frame composition is unit-testable. Each 50-unit game
//! cell becomes a 2x1 block of terminal cells to compensate for glyph aspect
//! ratio.

use crate::core::GameSnapshot;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PowerUpKind, Position, GRID_HEIGHT, GRID_WIDTH, POWER_UP_KINDS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// The snake board renderer.
pub struct GameView {
    /// Game cell width in terminal columns.
    cell_w: u16,
    /// Game cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

// Palette lifted from the original: green snake on black, red apple,
// blue/dark-green/red power-ups.
const HEAD_FG: Rgb = Rgb::new(0, 255, 0);
const BODY_FG: Rgb = Rgb::new(45, 180, 0);
const APPLE_FG: Rgb = Rgb::new(220, 40, 40);
const BOARD_BG: Rgb = Rgb::new(10, 10, 10);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame into a caller-owned framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_w = GRID_WIDTH as u16 * self.cell_w;
        let board_h = GRID_HEIGHT as u16 * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let board = CellStyle::new(Rgb::new(60, 60, 60), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        fb.fill_rect(start_x + 1, start_y + 1, board_w, board_h, ' ', board);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        if !snap.started {
            self.draw_welcome(fb, start_x, start_y, frame_w, frame_h);
            return;
        }

        // Apple first, then power-ups, then the snake on top: matches the
        // original's paint order, so the snake visibly covers overlaps.
        self.draw_cell(fb, start_x, start_y, snap.apple, '●', APPLE_FG, false);

        for p in snap.power_ups.iter() {
            self.draw_cell(fb, start_x, start_y, p.pos, '◆', power_up_fg(p.kind), true);
        }

        for (i, &seg) in snap.segments.iter().enumerate() {
            let fg = if i == 0 { HEAD_FG } else { BODY_FG };
            self.draw_cell(fb, start_x, start_y, seg, '█', fg, i == 0);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_game_over(fb, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        pos: Position,
        ch: char,
        fg: Rgb,
        bold: bool,
    ) {
        let style = CellStyle {
            fg,
            bg: BOARD_BG,
            bold,
        };
        let px = start_x + 1 + pos.col() as u16 * self.cell_w;
        let py = start_y + 1 + pos.row() as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.high_score), value);
        y = y.saturating_add(2);

        // Active effect countdowns, in slot order.
        for kind in POWER_UP_KINDS {
            let secs = snap.effect_secs[kind.slot()];
            if secs == 0 {
                continue;
            }
            let style = CellStyle::new(power_up_fg(kind), Rgb::BLACK);
            fb.put_str(panel_x, y, &format!("{}: {}s", kind.label(), secs), style);
            y = y.saturating_add(1);
        }
    }

    fn draw_welcome(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let title = CellStyle::new(HEAD_FG, BOARD_BG).bold();
        let text = CellStyle::new(Rgb::new(220, 220, 220), BOARD_BG);

        let lines: [(&str, CellStyle); 8] = [
            ("SNAKE", title),
            ("", text),
            ("Eat apples to gain higher scores.", text),
            ("Red power-up for 10s gives you double points.", text),
            ("Green power-up makes you go through yourself for 10s.", text),
            ("Blue power-up speeds you up for 5s.", text),
            ("", text),
            ("Press Enter to start", title),
        ];

        let mut ty = y + h.saturating_sub(lines.len() as u16) / 2;
        for (line, style) in lines {
            self.put_centered(fb, x, ty, w, line, style);
            ty = ty.saturating_add(1);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let headline = CellStyle::new(APPLE_FG, BOARD_BG).bold();
        let text = CellStyle::new(Rgb::new(220, 220, 220), BOARD_BG);

        let mid_y = y + h / 2;
        self.put_centered(fb, x, mid_y.saturating_sub(2), w, "GAME OVER", headline);
        self.put_centered(fb, x, mid_y, w, &format!("Score: {}", snap.score), text);
        self.put_centered(
            fb,
            x,
            mid_y.saturating_add(1),
            w,
            &format!("High Score: {}", snap.high_score),
            text,
        );
        self.put_centered(
            fb,
            x,
            mid_y.saturating_add(3),
            w,
            "Enter - restart   Q - quit",
            text,
        );
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
        fb.put_str(tx, y, text, style);
    }
}

fn power_up_fg(kind: PowerUpKind) -> Rgb {
    match kind {
        PowerUpKind::SpeedUp => Rgb::new(60, 120, 255),
        PowerUpKind::GoThroughSelf => Rgb::new(0, 100, 0),
        PowerUpKind::DoublePoints => Rgb::new(220, 40, 40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, PowerUp};
    use crate::types::UNIT_SIZE;

    const VIEW: Viewport = Viewport::new(100, 30);

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| row_text(fb, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn welcome_screen_shows_rules_and_start_hint() {
        let state = GameState::new(1);
        let fb = GameView::default().render(&state.snapshot(), VIEW);

        let text = screen_text(&fb);
        assert!(text.contains("SNAKE"));
        assert!(text.contains("Blue power-up speeds you up for 5s."));
        assert!(text.contains("Press Enter to start"));
    }

    #[test]
    fn running_game_draws_head_at_its_grid_cell() {
        let mut state = GameState::new(1);
        state.start();
        let snap = state.snapshot();
        let fb = GameView::default().render(&snap, VIEW);

        // Head starts at the origin cell; the frame is centered.
        let board_w = GRID_WIDTH as u16 * 2;
        let board_h = GRID_HEIGHT as u16;
        let start_x = (VIEW.width - (board_w + 2)) / 2;
        let start_y = (VIEW.height - (board_h + 2)) / 2;

        let head = fb.get(start_x + 1, start_y + 1).unwrap();
        assert_eq!(head.ch, '█');
        assert_eq!(head.style.fg, HEAD_FG);
    }

    #[test]
    fn hud_shows_score_and_high_score() {
        let mut state = GameState::new(1);
        state.start();
        let fb = GameView::default().render(&state.snapshot(), VIEW);

        let text = screen_text(&fb);
        assert!(text.contains("SCORE"));
        assert!(text.contains("HIGH"));
    }

    #[test]
    fn active_effects_get_countdown_lines() {
        let mut state = GameState::new(1);
        state.start();
        let mut snap = state.snapshot();
        snap.effect_secs[PowerUpKind::SpeedUp.slot()] = 3;
        snap.effect_secs[PowerUpKind::DoublePoints.slot()] = 10;

        let text = screen_text(&GameView::default().render(&snap, VIEW));
        assert!(text.contains("Speed Up: 3s"));
        assert!(text.contains("Double XP: 10s"));
        assert!(!text.contains("Go Through Self"));
    }

    #[test]
    fn game_over_overlay_shows_both_scores() {
        let mut state = GameState::new(1);
        state.start();
        let mut snap = state.snapshot();
        snap.game_over = true;
        snap.score = 4;
        snap.high_score = 9;

        let text = screen_text(&GameView::default().render(&snap, VIEW));
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Score: 4"));
        assert!(text.contains("High Score: 9"));
        assert!(text.contains("Enter - restart"));
    }

    #[test]
    fn power_ups_render_with_their_palette_color() {
        let mut state = GameState::new(1);
        state.start();
        let mut snap = state.snapshot();
        snap.power_ups.clear();
        snap.power_ups
            .try_push(PowerUp {
                pos: Position::new(5 * UNIT_SIZE, 3 * UNIT_SIZE),
                kind: PowerUpKind::SpeedUp,
            })
            .unwrap();
        // Keep the snake away from the cell under test.
        snap.segments.clear();
        snap.segments.try_push(Position::new(0, 0)).unwrap();
        snap.apple = Position::new(0, 14 * UNIT_SIZE);

        let fb = GameView::default().render(&snap, VIEW);

        let board_w = GRID_WIDTH as u16 * 2;
        let board_h = GRID_HEIGHT as u16;
        let start_x = (VIEW.width - (board_w + 2)) / 2;
        let start_y = (VIEW.height - (board_h + 2)) / 2;

        let cell = fb.get(start_x + 1 + 5 * 2, start_y + 1 + 3).unwrap();
        assert_eq!(cell.ch, '◆');
        assert_eq!(cell.style.fg, power_up_fg(PowerUpKind::SpeedUp));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut state = GameState::new(1);
        state.start();
        let _ = GameView::default().render(&state.snapshot(), Viewport::new(10, 3));
    }
}
