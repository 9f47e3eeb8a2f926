//! Per-user stake position

use serde::{Deserialize, Serialize};

/// A user's staked receipt-token position.
///
/// `last_claimed` is the accrual checkpoint: the last instant at which all
/// owed reward was settled. It never moves backwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stake {
    pub amount: u64,
    pub last_claimed: u64,
}

impl Stake {
    pub fn new(now: u64) -> Self {
        Self {
            amount: 0,
            last_claimed: now,
        }
    }

    /// Seconds elapsed since the accrual checkpoint.
    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.last_claimed)
    }

    /// Advance the checkpoint. A stale `now` leaves it where it is.
    pub fn checkpoint(&mut self, now: u64) {
        self.last_claimed = self.last_claimed.max(now);
    }
}
