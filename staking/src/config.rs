//! Engine configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::constants::{
    BASIS_POINTS, DEFAULT_BURN_BONUS_BPS, DEFAULT_EARLY_EXIT_PENALTY_BPS,
    DEFAULT_REWARD_RATE_BPS, SECONDS_PER_DAY,
};
use crate::lock::LockTier;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Staking engine parameters.
///
/// Rates are annualized basis points; durations are seconds. Missing fields
/// fall back to the defaults, so a config file may override a single value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StakingConfig {
    /// Annualized yield on staked receipt tokens.
    pub reward_rate_bps: u64,
    /// Burn-for-reward payout as a fraction of the burned amount.
    pub burn_bonus_bps: u64,
    /// Flat penalty withheld from principal on early unlock.
    pub early_exit_penalty_bps: u64,
    /// Selectable lock terms. Durations must be unique.
    pub lock_tiers: Vec<LockTier>,
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self {
            reward_rate_bps: DEFAULT_REWARD_RATE_BPS,
            burn_bonus_bps: DEFAULT_BURN_BONUS_BPS,
            early_exit_penalty_bps: DEFAULT_EARLY_EXIT_PENALTY_BPS,
            lock_tiers: vec![
                LockTier {
                    duration: 30 * SECONDS_PER_DAY,
                    apy_bps: 500,
                },
                LockTier {
                    duration: 90 * SECONDS_PER_DAY,
                    apy_bps: 1_000,
                },
                LockTier {
                    duration: 180 * SECONDS_PER_DAY,
                    apy_bps: 1_400,
                },
            ],
        }
    }
}

impl StakingConfig {
    /// Load and validate a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.early_exit_penalty_bps >= BASIS_POINTS {
            return Err(ConfigError::Invalid(format!(
                "early exit penalty must stay below 100%, got {} bps",
                self.early_exit_penalty_bps
            )));
        }
        if self.burn_bonus_bps < BASIS_POINTS {
            return Err(ConfigError::Invalid(format!(
                "burn bonus must be at least 100%, got {} bps",
                self.burn_bonus_bps
            )));
        }
        if self.lock_tiers.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one lock tier is required".to_string(),
            ));
        }
        for (i, tier) in self.lock_tiers.iter().enumerate() {
            if tier.duration == 0 {
                return Err(ConfigError::Invalid(format!(
                    "lock tier {} has zero duration",
                    i
                )));
            }
            if self.lock_tiers[..i].iter().any(|t| t.duration == tier.duration) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate lock tier duration {}s",
                    tier.duration
                )));
            }
        }
        Ok(())
    }

    /// The tier whose duration matches exactly, if any.
    pub fn tier_for(&self, duration: u64) -> Option<&LockTier> {
        self.lock_tiers.iter().find(|t| t.duration == duration)
    }
}
