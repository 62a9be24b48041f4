//! Session journal: one JSON object per line describing what happened in a run.
//!
//! Records carry a `type` tag, a sequence number and a millisecond timestamp
//! relative to the start of the session, in the same spirit as the wire log of a
//! line-delimited JSON protocol. A write failure disables the journal for the rest of
//! the session; the game keeps running.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::MinerConfig;
use crate::core::{GameEvent, GameState, Session, TimeStep};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    SessionStart {
        seq: u64,
        ts: u64,
        seed: u32,
        player_speed: f32,
        /// Fixed step in milliseconds, absent for a variable step.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fixed_step_ms: Option<u32>,
        start_cell: u8,
    },
    CellEntered {
        seq: u64,
        ts: u64,
        tick: u64,
        cell: u8,
        first_visit: bool,
    },
    RockMined {
        seq: u64,
        ts: u64,
        tick: u64,
        rock: u8,
        cell: u8,
        treasure: bool,
    },
    SessionEnd {
        seq: u64,
        ts: u64,
        ticks: u64,
        frames: u64,
        cells_visited: u8,
        rocks_mined: u8,
        treasure_found: bool,
        /// Snapshot fingerprint as 16 lowercase hex digits.
        state_hash: String,
    },
}

impl JournalRecord {
    pub fn seq(&self) -> u64 {
        match self {
            JournalRecord::SessionStart { seq, .. }
            | JournalRecord::CellEntered { seq, .. }
            | JournalRecord::RockMined { seq, .. }
            | JournalRecord::SessionEnd { seq, .. } => *seq,
        }
    }
}

pub struct Journal<W: Write> {
    out: Option<W>,
    seq: u64,
    started: Instant,
    buf: Vec<u8>,
    error: Option<String>,
}

impl Journal<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            started: Instant::now(),
            buf: Vec::with_capacity(256),
            error: None,
        }
    }

    /// A journal that drops every record.
    pub fn disabled() -> Self {
        Self {
            out: None,
            seq: 0,
            started: Instant::now(),
            buf: Vec::new(),
            error: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// The write error that disabled the journal, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn session_start(&mut self, config: &MinerConfig, state: &GameState) {
        let fixed_step_ms = match config.time_step() {
            TimeStep::Fixed { .. } => config.fixed_step_ms,
            TimeStep::Variable => None,
        };
        let (seq, ts) = self.stamp();
        self.write(&JournalRecord::SessionStart {
            seq,
            ts,
            seed: config.seed,
            player_speed: state.player().speed,
            fixed_step_ms,
            start_cell: state.current_cell().get(),
        });
    }

    pub fn event(&mut self, tick: u64, event: &GameEvent) {
        let (seq, ts) = self.stamp();
        let record = match *event {
            GameEvent::CellEntered { cell, first_visit } => JournalRecord::CellEntered {
                seq,
                ts,
                tick,
                cell: cell.get(),
                first_visit,
            },
            GameEvent::RockMined {
                rock,
                cell,
                treasure,
            } => JournalRecord::RockMined {
                seq,
                ts,
                tick,
                rock: rock as u8,
                cell: cell.get(),
                treasure,
            },
        };
        self.write(&record);
    }

    pub fn session_end(&mut self, session: &Session) {
        let state = session.state();
        let snap = state.snapshot();
        let (seq, ts) = self.stamp();
        self.write(&JournalRecord::SessionEnd {
            seq,
            ts,
            ticks: state.ticks(),
            frames: session.frames(),
            cells_visited: snap.visited_count() as u8,
            rocks_mined: snap.mined_count() as u8,
            treasure_found: snap.treasure_found,
            state_hash: format!("{:016x}", snap.fingerprint()),
        });
        self.flush();
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if let Err(e) = out.flush() {
                self.fail(e);
            }
        }
    }

    /// Flush and hand back the writer, if the journal is still enabled.
    pub fn into_inner(mut self) -> Option<W> {
        self.flush();
        self.out.take()
    }

    fn stamp(&mut self) -> (u64, u64) {
        self.seq += 1;
        (self.seq, self.started.elapsed().as_millis() as u64)
    }

    fn write(&mut self, record: &JournalRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if let Err(e) = out.write_all(&self.buf) {
            self.fail(e);
        }
    }

    fn fail(&mut self, e: std::io::Error) {
        self.out = None;
        self.error = Some(e.to_string());
    }
}
