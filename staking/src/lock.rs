//! Fixed-term reward locks and APY tiers

use serde::{Deserialize, Serialize};

/// A configured (duration, APY) pair selectable at lock creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LockTier {
    /// Lock term in seconds. Must match exactly when locking.
    pub duration: u64,
    /// Annualized yield in basis points.
    pub apy_bps: u64,
}

/// One locked reward-token position.
///
/// Locks live in an append-only per-user sequence and are addressed by
/// position forever; `claimed` is set exactly once and never reset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lock {
    pub amount: u64,
    pub start_time: u64,
    pub unlock_time: u64,
    /// APY frozen from the tier in effect at creation.
    pub apy_bps: u64,
    pub claimed: bool,
}

impl Lock {
    pub fn is_mature(&self, now: u64) -> bool {
        now >= self.unlock_time
    }

    /// Full locked term in seconds.
    pub fn term(&self) -> u64 {
        self.unlock_time.saturating_sub(self.start_time)
    }
}
