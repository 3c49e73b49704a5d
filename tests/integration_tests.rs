//! Integration tests for the full pipeline: input mapping -> game state ->
//! snapshot -> frame composition.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::input::handle_key_event;
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Direction, GameAction, BASE_STEP_MS, TICK_MS, UNIT_SIZE};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn frame_text(fb: &FrameBuffer) -> String {
    let mut out = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
        }
        out.push('\n');
    }
    out
}

#[test]
fn key_presses_map_to_game_actions() {
    assert_eq!(
        handle_key_event(press(KeyCode::Left)),
        Some(GameAction::Turn(Direction::Left))
    );
    assert_eq!(
        handle_key_event(press(KeyCode::Char('w'))),
        Some(GameAction::Turn(Direction::Up))
    );
    assert_eq!(
        handle_key_event(press(KeyCode::Enter)),
        Some(GameAction::Confirm)
    );
    assert_eq!(handle_key_event(press(KeyCode::Char('x'))), None);
}

#[test]
fn enter_starts_the_game_through_the_input_layer() {
    let mut state = GameState::new(11);
    assert!(!state.snapshot().started);

    if let Some(action) = handle_key_event(press(KeyCode::Enter)) {
        state.apply_action(action);
    }
    assert!(state.snapshot().playable());
}

#[test]
fn steered_snake_renders_where_the_state_says() {
    let mut state = GameState::new(11);
    state.apply_action(GameAction::Confirm);

    if let Some(action) = handle_key_event(press(KeyCode::Down)) {
        state.apply_action(action);
    }
    // One full movement interval, in engine-sized ticks.
    let mut remaining = BASE_STEP_MS;
    while remaining > 0 {
        state.tick(TICK_MS.min(remaining));
        remaining = remaining.saturating_sub(TICK_MS);
    }

    let snap = state.snapshot();
    assert_eq!(snap.segments[0].y, UNIT_SIZE);

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(100, 30));
    let text = frame_text(&fb);
    assert!(text.contains('█'), "snake should be on screen");
    assert!(text.contains("SCORE"));
}

#[test]
fn snapshot_reuse_matches_fresh_snapshots() {
    let mut state = GameState::new(11);
    state.apply_action(GameAction::Confirm);

    let mut reused = GameSnapshot::default();
    for _ in 0..40 {
        state.tick(TICK_MS);
        state.snapshot_into(&mut reused);
        assert_eq!(reused, state.snapshot());
    }
}

#[test]
fn render_loop_survives_resizes() {
    let mut state = GameState::new(11);
    state.apply_action(GameAction::Confirm);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    for (w, h) in [(100u16, 30u16), (54, 17), (30, 8), (200, 50), (1, 1)] {
        state.tick(TICK_MS);
        state.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}
