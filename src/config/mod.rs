pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::board::{Pacing, Rules};
use crate::game::{
    BOMB_BLAST_COUNT, BONUS_DROP_PERCENT, BONUS_TRIGGERED_MS, RUN_CLEARED_MS, SWAP_REVERT_MS,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Fixed seed for reproducible boards; a random one is used when absent
    pub seed: Option<u64>,
    pub rules: RulesConfig,
    pub timing: TimingConfig,
}

// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub bonus_drop_percent: u8,
    pub bomb_blast_count: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            bonus_drop_percent: BONUS_DROP_PERCENT,
            bomb_blast_count: BOMB_BLAST_COUNT,
        }
    }
}

// Pauses between visible cascade steps, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub swap_revert_ms: u64,
    pub run_cleared_ms: u64,
    pub bonus_triggered_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            swap_revert_ms: SWAP_REVERT_MS,
            run_cleared_ms: RUN_CLEARED_MS,
            bonus_triggered_ms: BONUS_TRIGGERED_MS,
        }
    }
}

impl Config {
    /// Engine rules described by this configuration. The drop chance is capped at 100.
    #[must_use]
    pub fn rules(&self) -> Rules {
        Rules {
            bonus_drop_percent: self.rules.bonus_drop_percent.min(100),
            bomb_blast_count: self.rules.bomb_blast_count,
            pacing: Pacing {
                swap_revert: Duration::from_millis(self.timing.swap_revert_ms),
                run_cleared: Duration::from_millis(self.timing.run_cleared_ms),
                bonus_triggered: Duration::from_millis(self.timing.bonus_triggered_ms),
            },
        }
    }

    /// Random source for a session, seeded from the config when a seed is set.
    #[must_use]
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}
