//! TUI Miner (workspace facade crate).
//!
//! Re-exports the member crates as `tui_miner::{types, core, scene, input, term}` and
//! owns the pieces only the binary needs: environment configuration and the
//! session journal.

pub mod config;
pub mod journal;

pub use tui_miner_core as core;
pub use tui_miner_input as input;
pub use tui_miner_scene as scene;
pub use tui_miner_term as term;
pub use tui_miner_types as types;

pub use config::MinerConfig;
pub use journal::{Journal, JournalRecord};
