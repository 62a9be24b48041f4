use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_miner::core::{GameSnapshot, GameState, Session, TimeStep};
use tui_miner::scene::{render_into, DrawList};
use tui_miner::term::{encode_diff_into, FrameBuffer, SceneView, StatusView, Viewport};
use tui_miner::types::{Direction, InputSnapshot};

/// A state with a handful of cells uncovered, so the draw list is not trivial.
fn explored_state() -> GameState {
    let mut state = GameState::with_treasure_rock(4);
    for dir in [
        Direction::Left,
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Up,
        Direction::Right,
    ] {
        state.tick(&InputSnapshot::idle().with(dir), 1.0);
    }
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_treasure_rock(0);
    let inputs = [
        InputSnapshot::idle().with(Direction::Left),
        InputSnapshot::idle().with(Direction::Right),
    ];
    let mut i = 0usize;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            state.tick(black_box(&inputs[(i / 32) % 2]), black_box(0.016));
        })
    });
}

fn bench_fixed_step_frame(c: &mut Criterion) {
    let mut session = Session::new(explored_state(), TimeStep::fixed_millis(4));
    let input = InputSnapshot::idle().with(Direction::Down);

    c.bench_function("session_frame_fixed_4ms", |b| {
        b.iter(|| {
            session.frame(black_box(&input), black_box(0.016));
            let _ = session.take_events();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = explored_state();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into_and_fingerprint", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(snap.fingerprint());
        })
    });
}

fn bench_render_list(c: &mut Criterion) {
    let state = explored_state();
    let mut list = DrawList::new();

    c.bench_function("scene_render_into", |b| {
        b.iter(|| {
            render_into(black_box(&state), &mut list);
            black_box(list.len());
        })
    });
}

fn bench_term_render(c: &mut Criterion) {
    let state = explored_state();
    let mut list = DrawList::new();
    render_into(&state, &mut list);
    let status = StatusView::from(&state.snapshot());
    let view = SceneView::default();
    let viewport = Viewport::new(100, 30);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("scene_view_render_into", |b| {
        b.iter(|| {
            view.render_into(black_box(&list), Some(&status), viewport, &mut fb);
        })
    });

    let prev = view.render(&list, Some(&status), viewport);
    let mut moved = state.clone();
    moved.tick(&InputSnapshot::idle().with(Direction::Down), 0.05);
    render_into(&moved, &mut list);
    let next = view.render(&list, Some(&status), viewport);
    let mut out = Vec::with_capacity(16 * 1024);

    c.bench_function("encode_diff_player_step", |b| {
        b.iter(|| {
            out.clear();
            let _ = encode_diff_into(black_box(&prev), black_box(&next), &mut out);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_fixed_step_frame,
    bench_snapshot,
    bench_render_list,
    bench_term_render
);
criterion_main!(benches);
