//! Game state module - the mutable heart of the simulation.
//!
//! Holds the player, visitation and mining flags, the treasure, and the active
//! message, and advances them one tick at a time from an [`InputSnapshot`].

use arrayvec::ArrayVec;
use glam::Vec2;

use crate::grid::{cell_center, cell_index, CellIndex};
use crate::paths;
use crate::rng::SimpleRng;
use crate::rocks::{rock_at, ROCK_CELLS};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Events buffered between drains; extra events in an undrained buffer are dropped.
pub const EVENT_CAPACITY: usize = 16;

/// The player token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec2,
    /// World units per second.
    pub speed: f32,
}

/// The hidden treasure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treasure {
    /// Rock index holding the treasure.
    pub rock: usize,
    pub found: bool,
}

impl Treasure {
    pub fn cell(&self) -> CellIndex {
        // `rock` is reduced modulo ROCK_COUNT on construction.
        ROCK_CELLS[self.rock]
    }

    pub fn position(&self) -> Vec2 {
        cell_center(self.cell())
    }
}

/// Something observers may want to know about (consumed via [`GameState::take_events`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The player moved into a new cell.
    CellEntered { cell: CellIndex, first_visit: bool },
    /// A rock was mined for the first time.
    RockMined {
        rock: usize,
        cell: CellIndex,
        treasure: bool,
    },
}

/// Result of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Quit was requested; the state was not touched.
    Quit,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    player: Player,
    current_cell: CellIndex,
    cells_visited: [bool; CELL_COUNT],
    rocks_mined: [bool; ROCK_COUNT],
    treasure: Treasure,
    message: MessageKind,
    /// Ticks processed since the session started.
    ticks: u64,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create a new game, drawing the treasure rock from `seed`.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        Self::with_treasure_rock(rng.pick_treasure_rock())
    }

    /// Create a new game with the treasure in a known rock (taken modulo the rock count).
    pub fn with_treasure_rock(rock: usize) -> Self {
        let start = CellIndex::from_raw(START_CELL);
        let mut cells_visited = [false; CELL_COUNT];
        cells_visited[start.as_usize()] = true;

        let mut state = Self {
            player: Player {
                position: PLAYER_START,
                speed: DEFAULT_PLAYER_SPEED,
            },
            current_cell: start,
            cells_visited,
            rocks_mined: [false; ROCK_COUNT],
            treasure: Treasure {
                rock: rock % ROCK_COUNT,
                found: false,
            },
            message: MessageKind::Explore,
            ticks: 0,
            events: ArrayVec::new(),
        };
        state.message = state.message_for(start);
        state
    }

    /// Override the player speed. Non-finite or negative speeds are ignored.
    pub fn with_speed(mut self, speed: f32) -> Self {
        if speed.is_finite() && speed >= 0.0 {
            self.player.speed = speed;
        }
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn position(&self) -> Vec2 {
        self.player.position
    }

    pub fn current_cell(&self) -> CellIndex {
        self.current_cell
    }

    pub fn cells_visited(&self) -> &[bool; CELL_COUNT] {
        &self.cells_visited
    }

    pub fn is_visited(&self, cell: CellIndex) -> bool {
        self.cells_visited[cell.as_usize()]
    }

    pub fn visited_count(&self) -> usize {
        self.cells_visited.iter().filter(|&&v| v).count()
    }

    pub fn rocks_mined(&self) -> &[bool; ROCK_COUNT] {
        &self.rocks_mined
    }

    pub fn is_mined(&self, rock: usize) -> bool {
        self.rocks_mined.get(rock).copied().unwrap_or(false)
    }

    pub fn treasure(&self) -> Treasure {
        self.treasure
    }

    /// The game is won; movement and mining are locked out.
    pub fn treasure_found(&self) -> bool {
        self.treasure.found
    }

    pub fn message(&self) -> MessageKind {
        self.message
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Drain events recorded since the last call.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.position = self.player.position;
        out.current_cell = self.current_cell.get();
        out.cells_visited = self.cells_visited;
        out.rocks_mined = self.rocks_mined;
        out.treasure_rock = self.treasure.rock as u8;
        out.treasure_found = self.treasure.found;
        out.message = self.message;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Order: quit check, movement (skipped once the treasure is found), cell
    /// recompute, visit flag, mining, message.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) -> TickOutcome {
        if input.quit {
            return TickOutcome::Quit;
        }
        self.ticks = self.ticks.wrapping_add(1);

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        if !self.treasure.found {
            self.apply_movement(input, dt);
        }

        self.update_current_cell();

        if input.mine && !self.treasure.found {
            self.mine_current_cell();
        }

        self.message = self.message_for(self.current_cell);
        TickOutcome::Continue
    }

    /// Apply every held direction against the bounds of the cell occupied before
    /// the move. A direction applied after another one has left the corridor line
    /// stops at the wall margin.
    fn apply_movement(&mut self, input: &InputSnapshot, dt: f32) {
        let distance = self.player.speed * dt;
        if distance <= 0.0 || !input.any_direction() {
            return;
        }

        let cell = self.current_cell;
        let mut position = self.player.position;
        for dir in Direction::ALL {
            if input.is_pressed(dir) {
                position = paths::step_from(cell, position, dir, distance);
            }
        }
        self.player.position = position;
    }

    fn update_current_cell(&mut self) {
        let cell = cell_index(self.player.position);
        // Absorbs rounding between the table and computed centers.
        self.player.position = paths::bounds(cell).clamp(self.player.position);

        let first_visit = !self.cells_visited[cell.as_usize()];
        self.cells_visited[cell.as_usize()] = true;

        if cell != self.current_cell {
            self.current_cell = cell;
            self.push_event(GameEvent::CellEntered { cell, first_visit });
        }
    }

    fn mine_current_cell(&mut self) {
        let Some(rock) = rock_at(self.current_cell) else {
            return;
        };
        if self.rocks_mined[rock] {
            return;
        }

        self.rocks_mined[rock] = true;
        let treasure = rock == self.treasure.rock;
        if treasure {
            self.treasure.found = true;
        }
        self.push_event(GameEvent::RockMined {
            rock,
            cell: self.current_cell,
            treasure,
        });
    }

    fn message_for(&self, cell: CellIndex) -> MessageKind {
        match rock_at(cell) {
            None => MessageKind::Explore,
            Some(rock) if !self.rocks_mined[rock] => MessageKind::RockHere,
            Some(rock) if rock == self.treasure.rock => MessageKind::TreasureHere,
            Some(_) => MessageKind::MinedEmpty,
        }
    }

    fn push_event(&mut self, event: GameEvent) {
        let _ = self.events.try_push(event);
    }
}
