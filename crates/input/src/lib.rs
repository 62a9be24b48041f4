//! Terminal input module.
//!
//! Independent of any UI framework: maps `crossterm` key events into
//! [`crate::types::GameAction`]s and folds them into one
//! [`InputSnapshot`](crate::types::InputSnapshot) per frame, releasing held
//! directions on a timeout for terminals that never report key releases.

pub mod handler;
pub mod map;

pub use tui_miner_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
