//! Reward arithmetic
//!
//! Amounts are u64 token units; intermediates widen to u128 and results
//! truncate, so rounding never credits more than the exact product. The one
//! exception is the early-exit penalty, which rounds up.

use crate::constants::{BASIS_POINTS, SECONDS_PER_YEAR};
use crate::error::{Result, StakingError};

/// Linear time-weighted accrual:
/// `staked * rate_bps * elapsed / (BASIS_POINTS * SECONDS_PER_YEAR)`.
pub fn accrued_reward(staked: u64, rate_bps: u64, elapsed: u64) -> Result<u64> {
    if staked == 0 || rate_bps == 0 || elapsed == 0 {
        return Ok(0);
    }
    let numerator = (staked as u128)
        .checked_mul(rate_bps as u128)
        .and_then(|v| v.checked_mul(elapsed as u128))
        .ok_or(StakingError::MathOverflow)?;
    let denominator = BASIS_POINTS as u128 * SECONDS_PER_YEAR as u128;
    u64::try_from(numerator / denominator).map_err(|_| StakingError::MathOverflow)
}

/// Full-term yield of a matured lock.
pub fn lock_yield(amount: u64, apy_bps: u64, term: u64) -> Result<u64> {
    accrued_reward(amount, apy_bps, term)
}

/// Payout for burning `amount` at `bonus_bps` of the burned amount.
pub fn burn_payout(amount: u64, bonus_bps: u64) -> Result<u64> {
    let payout = (amount as u128)
        .checked_mul(bonus_bps as u128)
        .ok_or(StakingError::MathOverflow)?
        / BASIS_POINTS as u128;
    u64::try_from(payout).map_err(|_| StakingError::MathOverflow)
}

/// Early-exit penalty withheld from locked principal, rounded up so any
/// positive principal forfeits at least one unit.
pub fn early_exit_penalty(amount: u64, penalty_bps: u64) -> Result<u64> {
    if amount == 0 || penalty_bps == 0 {
        return Ok(0);
    }
    let numerator = (amount as u128)
        .checked_mul(penalty_bps as u128)
        .ok_or(StakingError::MathOverflow)?;
    let denominator = BASIS_POINTS as u128;
    let penalty = (numerator + denominator - 1) / denominator;
    u64::try_from(penalty).map_err(|_| StakingError::MathOverflow)
}
