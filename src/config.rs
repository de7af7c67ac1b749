//! Runtime configuration from environment variables.
//!
//! - `MEMORY_SEED`: RNG seed (default: derived from the system clock)
//! - `MEMORY_MISMATCH_DELAY_MS`: how long a mismatched pair stays face up (default: 1000)
//! - `MEMORY_LOG_PATH`: log file; unset or empty disables log output

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::types::MISMATCH_DELAY_MS;

pub const ENV_SEED: &str = "MEMORY_SEED";
pub const ENV_MISMATCH_DELAY_MS: &str = "MEMORY_MISMATCH_DELAY_MS";
pub const ENV_LOG_PATH: &str = "MEMORY_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub mismatch_delay_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(raw) = get(ENV_SEED) {
            config.seed = raw
                .parse()
                .with_context(|| format!("{ENV_SEED}={raw:?} is not a u32"))?;
        }
        if let Some(raw) = get(ENV_MISMATCH_DELAY_MS) {
            config.mismatch_delay_ms = raw
                .parse()
                .with_context(|| format!("{ENV_MISMATCH_DELAY_MS}={raw:?} is not a u32"))?;
        }
        config.log_path = get(ENV_LOG_PATH).map(PathBuf::from);

        Ok(config)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
