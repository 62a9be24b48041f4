use tui_miner::core::{GameSnapshot, GameState};
use tui_miner::types::{Direction, InputSnapshot};

#[test]
fn snapshot_into_matches_snapshot() {
    let mut gs = GameState::with_treasure_rock(1);
    gs.tick(&InputSnapshot::idle().with(Direction::Left), 0.5);

    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);
    assert_eq!(snap, gs.snapshot());
    assert_eq!(snap.fingerprint(), gs.snapshot().fingerprint());
}

#[test]
fn fingerprint_tracks_progress() {
    let mut gs = GameState::with_treasure_rock(1);
    let start = gs.snapshot().fingerprint();

    // Idle ticks leave the fingerprint alone.
    gs.tick(&InputSnapshot::idle(), 0.016);
    assert_eq!(gs.snapshot().fingerprint(), start);

    gs.tick(&InputSnapshot::idle().with(Direction::Left), 1.0);
    let moved = gs.snapshot().fingerprint();
    assert_ne!(moved, start);

    // Same walk from the same start gives the same fingerprint.
    let mut again = GameState::with_treasure_rock(1);
    again.tick(&InputSnapshot::idle().with(Direction::Left), 1.0);
    assert_eq!(again.snapshot().fingerprint(), moved);
}

#[test]
fn fingerprint_covers_the_treasure_rock() {
    let a = GameState::with_treasure_rock(0).snapshot().fingerprint();
    let b = GameState::with_treasure_rock(4).snapshot().fingerprint();
    assert_ne!(a, b);
}
