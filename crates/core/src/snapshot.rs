//! Plain-data copy of the game state for observers (journal, tests, benches).

use std::hash::{Hash, Hasher};

use glam::Vec2;

use crate::types::{MessageKind, CELL_COUNT, ROCK_COUNT};

/// Stable 64-bit FNV-1a hasher for [`GameSnapshot::fingerprint`].
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub position: Vec2,
    pub current_cell: u8,
    pub cells_visited: [bool; CELL_COUNT],
    pub rocks_mined: [bool; ROCK_COUNT],
    pub treasure_rock: u8,
    pub treasure_found: bool,
    pub message: MessageKind,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn visited_count(&self) -> usize {
        self.cells_visited.iter().filter(|&&v| v).count()
    }

    pub fn mined_count(&self) -> usize {
        self.rocks_mined.iter().filter(|&&m| m).count()
    }

    /// Deterministic hash of every field. Positions hash by their bit pattern.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Fnv1aHasher::new();
        self.position.x.to_bits().hash(&mut hasher);
        self.position.y.to_bits().hash(&mut hasher);
        self.current_cell.hash(&mut hasher);
        self.cells_visited.hash(&mut hasher);
        self.rocks_mined.hash(&mut hasher);
        self.treasure_rock.hash(&mut hasher);
        self.treasure_found.hash(&mut hasher);
        self.message.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            current_cell: 0,
            cells_visited: [false; CELL_COUNT],
            rocks_mined: [false; ROCK_COUNT],
            treasure_rock: 0,
            treasure_found: false,
            message: MessageKind::Explore,
        }
    }
}
