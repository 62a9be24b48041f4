use serde_json::Value;

use tui_miner::core::{GameState, Session, TimeStep};
use tui_miner::types::{Direction, InputSnapshot};
use tui_miner::{Journal, JournalRecord, MinerConfig};

fn run_to_treasure(journal: &mut Journal<Vec<u8>>, config: &MinerConfig) {
    // One tick per frame regardless of the configured step.
    let mut session = Session::new(GameState::with_treasure_rock(0), TimeStep::Variable);
    journal.session_start(config, session.state());

    let walk = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Up,
    ];
    for dir in walk {
        session.frame(&InputSnapshot::idle().with(dir), 1.0);
        let tick = session.state().ticks();
        for ev in session.take_events() {
            journal.event(tick, &ev);
        }
    }
    session.frame(&InputSnapshot::idle().mining(), 0.0);
    let tick = session.state().ticks();
    for ev in session.take_events() {
        journal.event(tick, &ev);
    }
    journal.session_end(&session);
}

#[test]
fn journal_lines_are_json_objects_with_types() {
    let config = MinerConfig::default();
    let mut journal = Journal::new(Vec::new());
    run_to_treasure(&mut journal, &config);

    let bytes = journal.into_inner().expect("journal still enabled");
    let text = String::from_utf8(bytes).unwrap();
    let values: Vec<Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

    // start, six cell entries, one mined rock, end.
    assert_eq!(values.len(), 9);
    assert_eq!(values[0]["type"], "session_start");
    assert_eq!(values[0]["start_cell"], 12);
    assert!(values[1..7].iter().all(|v| v["type"] == "cell_entered"));
    assert_eq!(values[6]["cell"], 4);

    assert_eq!(values[7]["type"], "rock_mined");
    assert_eq!(values[7]["rock"], 0);
    assert_eq!(values[7]["treasure"], true);
    assert_eq!(values[7]["tick"], 7);

    let end = &values[8];
    assert_eq!(end["type"], "session_end");
    assert_eq!(end["ticks"], 7);
    assert_eq!(end["frames"], 7);
    assert_eq!(end["cells_visited"], 7);
    assert_eq!(end["rocks_mined"], 1);
    assert_eq!(end["treasure_found"], true);

    for (i, v) in values.iter().enumerate() {
        assert_eq!(v["seq"], i as u64 + 1);
    }
}

#[test]
fn journal_records_round_trip_through_serde() {
    let config = MinerConfig {
        fixed_step_ms: Some(20),
        ..MinerConfig::default()
    };
    let mut journal = Journal::new(Vec::new());
    run_to_treasure(&mut journal, &config);

    let bytes = journal.into_inner().unwrap();
    let records: Vec<JournalRecord> = String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    match &records[0] {
        JournalRecord::SessionStart {
            fixed_step_ms, seed, ..
        } => {
            assert_eq!(*fixed_step_ms, Some(20));
            assert_eq!(*seed, config.seed);
        }
        other => panic!("expected session_start, got {other:?}"),
    }
    assert!(matches!(
        records.last(),
        Some(JournalRecord::SessionEnd {
            treasure_found: true,
            ..
        })
    ));
}

#[test]
fn journal_file_is_appended() {
    let path = std::env::temp_dir().join(format!("tui-miner-journal-{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);

    for _ in 0..2 {
        let mut journal = Journal::open(&path).unwrap();
        journal.session_start(&MinerConfig::default(), &GameState::with_treasure_rock(0));
        journal.flush();
    }

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    let _ = std::fs::remove_file(&path);
}
