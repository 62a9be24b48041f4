//! Runtime configuration from environment variables.
//!
//! Unset, empty, or unparsable values fall back to the defaults.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::TimeStep;
use crate::types::{DEFAULT_FRAME_MS, DEFAULT_KEY_RELEASE_TIMEOUT_MS, DEFAULT_PLAYER_SPEED};

#[derive(Debug, Clone, PartialEq)]
pub struct MinerConfig {
    /// Seed for the treasure draw.
    pub seed: u32,
    /// World units per second.
    pub player_speed: f32,
    /// Fixed update step; `None` runs one variable-length tick per frame.
    pub fixed_step_ms: Option<u32>,
    /// Frame budget for input polling.
    pub frame_ms: u32,
    pub key_release_timeout_ms: u32,
    /// JSON-lines session journal.
    pub log_path: Option<PathBuf>,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            player_speed: DEFAULT_PLAYER_SPEED,
            fixed_step_ms: None,
            frame_ms: DEFAULT_FRAME_MS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            log_path: None,
        }
    }
}

impl MinerConfig {
    /// Read `MINER_*` environment variables. Without `MINER_SEED` the seed comes
    /// from the wall clock.
    pub fn from_env() -> Self {
        use std::env;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let seed = get("MINER_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(seed_from_time);

        let player_speed = get("MINER_PLAYER_SPEED")
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(defaults.player_speed);

        let fixed_step_ms = get("MINER_FIXED_STEP_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&ms| ms > 0);

        let frame_ms = get("MINER_FRAME_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.frame_ms);

        let key_release_timeout_ms = get("MINER_KEY_RELEASE_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.key_release_timeout_ms);

        let log_path = get("MINER_LOG_PATH").map(PathBuf::from);

        Self {
            seed,
            player_speed,
            fixed_step_ms,
            frame_ms,
            key_release_timeout_ms,
            log_path,
        }
    }

    pub fn time_step(&self) -> TimeStep {
        self.fixed_step_ms
            .map(TimeStep::fixed_millis)
            .unwrap_or_default()
    }
}

fn seed_from_time() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
