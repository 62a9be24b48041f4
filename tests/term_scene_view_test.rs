use tui_miner::core::GameState;
use tui_miner::scene::render_list;
use tui_miner::term::{AnchorY, SceneView, StatusView, Viewport};
use tui_miner::types::{Direction, InputSnapshot, MessageKind};

fn screen_text(fb: &tui_miner::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::with_treasure_rock(0);
    let view = SceneView::default();

    // 5 columns of 8 chars, 7 rows (6 maze + banner) of 3 chars, plus border.
    let (w, h) = view.frame_size();
    assert_eq!((w, h), (42, 23));
    let fb = view.render(&render_list(&state), None, Viewport::new(w, h));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(w - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, h - 1).unwrap().ch, '└');
    assert_eq!(fb.get(w - 1, h - 1).unwrap().ch, '┘');
}

#[test]
fn term_view_shows_rock_after_its_cell_is_visited() {
    let mut state = GameState::with_treasure_rock(0);
    let view = SceneView::default().with_anchor_y(AnchorY::Top);
    let (w, h) = view.frame_size();

    let before = screen_text(&view.render(&render_list(&state), None, Viewport::new(w, h)));
    assert!(!before.contains('◆'));

    for dir in [Direction::Left, Direction::Left, Direction::Up] {
        state.tick(&InputSnapshot::idle().with(dir), 1.0);
    }
    // Off the rock's center so the player glyph does not cover it.
    state.tick(&InputSnapshot::idle().with(Direction::Down), 0.1);
    assert_eq!(state.current_cell().get(), 5);
    let after = screen_text(&view.render(&render_list(&state), None, Viewport::new(w, h)));
    assert!(after.contains('◆'));
    assert!(after.contains(MessageKind::RockHere.text()));

    state.tick(&InputSnapshot::idle().mining(), 0.0);
    let mined = screen_text(&view.render(&render_list(&state), None, Viewport::new(w, h)));
    assert!(!mined.contains('◆'));
    assert!(mined.contains(MessageKind::MinedEmpty.text()));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let state = GameState::with_treasure_rock(0);
    let view = SceneView::default();
    let (w, h) = view.frame_size();
    let status = StatusView::from(&state.snapshot());
    let list = render_list(&state);

    let wide = screen_text(&view.render(&list, Some(&status), Viewport::new(w + 40, h)));
    assert!(wide.contains("CELLS"));
    assert!(wide.contains("1/30"));
    assert!(wide.contains("0/5"));

    let narrow = screen_text(&view.render(&list, Some(&status), Viewport::new(w, h)));
    assert!(!narrow.contains("CELLS"));
}

#[test]
fn term_view_clips_to_small_viewports() {
    let state = GameState::with_treasure_rock(0);
    let fb = SceneView::default().render(&render_list(&state), None, Viewport::new(10, 4));
    assert_eq!((fb.width(), fb.height()), (10, 4));
}
