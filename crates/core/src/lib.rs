//! Core game logic - pure, deterministic, and testable.
//!
//! This crate owns every rule of the tile miner: the grid geometry, the per-cell
//! movement bounds, the rocks and the treasure, and the per-tick update step. It has
//! no dependency on terminals or I/O:
//!
//! - **Deterministic**: the same seed and the same inputs produce the same session
//! - **Total**: no transition can fail; bad input is clamped or ignored
//! - **Allocation-free ticks**: events buffer in a fixed-capacity `ArrayVec`
//!
//! # Module Structure
//!
//! - [`grid`]: world position <-> cell index mapping
//! - [`paths`]: literal per-cell movement bounds reproducing the maze
//! - [`rocks`]: which cells are minable and which rock each holds
//! - [`game_state`]: player, visitation, mining, treasure and the tick
//! - [`session`]: frame-time policy (variable or fixed step) around a `GameState`
//! - [`clock`]: injected frame clocks
//! - [`rng`]: seeded treasure draw
//! - [`snapshot`]: plain-data copy for observers
//!
//! # Game Rules
//!
//! - The player starts in the center cell and walks along corridors; a closed side
//!   stops them just past the cell center.
//! - Five cells hold a rock. Mining a rock reveals whether it held the treasure.
//! - Finding the treasure ends play: movement and mining are locked out, only quit
//!   remains.
//!
//! # Example
//!
//! ```
//! use tui_miner_core::{GameState, TickOutcome};
//! use tui_miner_types::{Direction, InputSnapshot, MessageKind};
//!
//! let mut game = GameState::with_treasure_rock(0);
//!
//! // Walk right: cell 12 is closed on that side.
//! let input = InputSnapshot::idle().with(Direction::Right);
//! assert_eq!(game.tick(&input, 0.5), TickOutcome::Continue);
//! assert_eq!(game.position().x, 0.012);
//! assert_eq!(game.current_cell().get(), 12);
//! assert_eq!(game.message(), MessageKind::Explore);
//! ```
//!
//! # Timing
//!
//! [`GameState::tick`](game_state::GameState::tick) takes elapsed seconds. By default
//! the session passes the measured frame delta straight through; a fixed step can be
//! opted into with [`TimeStep::Fixed`](session::TimeStep::Fixed).

pub mod clock;
pub mod game_state;
pub mod grid;
pub mod paths;
pub mod rng;
pub mod rocks;
pub mod session;
pub mod snapshot;

pub use tui_miner_types as types;

// Re-export commonly used types for convenience
pub use clock::{FixedClock, FrameClock, MonotonicClock};
pub use game_state::{GameEvent, GameState, Player, TickOutcome, Treasure, EVENT_CAPACITY};
pub use grid::{cell_center, cell_index, CellIndex};
pub use paths::{bounds, is_open, on_corridor_line, step_from, CellBounds};
pub use rng::SimpleRng;
pub use rocks::{rock_at, rock_cell, rocks};
pub use session::{Session, TimeStep};
pub use snapshot::GameSnapshot;
