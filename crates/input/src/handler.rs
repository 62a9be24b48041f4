//! Held-key tracking for terminal environments.
//!
//! Most terminals only report presses (and auto-repeats), never releases. A
//! direction therefore counts as held until `key_release_timeout_ms` passes without
//! another press or repeat for it. Terminals that do report releases can switch the
//! timeout off with [`InputHandler::with_release_events`].

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::{Direction, GameAction, InputSnapshot, DEFAULT_KEY_RELEASE_TIMEOUT_MS};

fn slot(dir: Direction) -> usize {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

/// Turns a stream of key events into one [`InputSnapshot`] per frame.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Milliseconds since each direction's last press or repeat; `None` when released.
    held_ms: [Option<u32>; 4],
    mine_pending: bool,
    quit: bool,
    key_release_timeout_ms: u32,
    release_events: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held_ms: [None; 4],
            mine_pending: false,
            quit: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// The terminal reports key releases; held keys never time out.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Feed one terminal key event. Returns the mapped action, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameAction> {
        if key.kind != KeyEventKind::Release && should_quit(key) {
            self.quit = true;
            return None;
        }
        let action = handle_key_event(key)?;
        match key.kind {
            KeyEventKind::Press => self.handle_key_press(action),
            // Auto-repeat keeps a direction alive but never re-triggers mining.
            KeyEventKind::Repeat => {
                if let GameAction::Move(dir) = action {
                    self.handle_key_press(GameAction::Move(dir));
                }
            }
            KeyEventKind::Release => self.handle_key_release(action),
        }
        Some(action)
    }

    pub fn handle_key_press(&mut self, action: GameAction) {
        match action {
            GameAction::Move(dir) => self.held_ms[slot(dir)] = Some(0),
            GameAction::Mine => self.mine_pending = true,
        }
    }

    pub fn handle_key_release(&mut self, action: GameAction) {
        if let GameAction::Move(dir) = action {
            self.held_ms[slot(dir)] = None;
        }
    }

    /// Age held keys by `elapsed_ms`, releasing any that timed out.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.release_events {
            return;
        }
        let timeout = self.key_release_timeout_ms;
        for held in self.held_ms.iter_mut() {
            if let Some(age) = held {
                let age = age.saturating_add(elapsed_ms);
                *held = if age > timeout { None } else { Some(age) };
            }
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held_ms[slot(dir)].is_some()
    }

    /// Input for the next tick. Consumes the pending mine press; quit stays latched.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let mut snap = InputSnapshot::idle();
        for dir in Direction::ALL {
            snap.set(dir, self.is_held(dir));
        }
        snap.mine = std::mem::take(&mut self.mine_pending);
        snap.quit = self.quit;
        snap
    }

    pub fn reset(&mut self) {
        self.held_ms = [None; 4];
        self.mine_pending = false;
        self.quit = false;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
