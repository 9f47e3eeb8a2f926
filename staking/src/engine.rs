//! Staking engine: accrual, burn bonus, and time locks
//!
//! Every state-mutating operation takes the ledgers and treasury it touches
//! as explicit `&mut` parameters plus the current time, runs all of its
//! guards first, and only then moves balances. A rejected call leaves every
//! balance, checkpoint, and lock record exactly as it found it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use ledger::{LedgerError, TokenLedger};
use treasury::{Treasury, TreasuryError};

use crate::config::StakingConfig;
use crate::error::{Result, StakingError};
use crate::lock::Lock;
use crate::rewards;
use crate::stake::Stake;

/// Aggregate engine counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StakingStats {
    /// Receipt tokens currently in engine custody from staking.
    pub total_staked: u64,
    /// Reward tokens currently locked (unclaimed principal).
    pub total_locked: u64,
    /// Cumulative accrual and lock-yield payouts from the float.
    pub total_rewards_paid: u64,
    /// Cumulative reward tokens destroyed by burn-for-reward.
    pub total_burned: u64,
    /// Users that have ever staked.
    pub staker_count: u64,
}

/// The staking engine.
///
/// Owns all per-user stake and lock records, keyed by address. The engine is
/// itself an account on both ledgers: staked receipt tokens and locked
/// reward principal sit in its custody balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakingEngine {
    account: String,
    config: StakingConfig,
    stakes: HashMap<String, Stake>,
    locks: HashMap<String, Vec<Lock>>,
    stats: StakingStats,
}

impl StakingEngine {
    pub fn new(account: &str, config: StakingConfig) -> Self {
        Self {
            account: account.to_string(),
            config,
            stakes: HashMap::new(),
            locks: HashMap::new(),
            stats: StakingStats::default(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn config(&self) -> &StakingConfig {
        &self.config
    }

    pub fn stats(&self) -> StakingStats {
        self.stats
    }

    pub fn stake_of(&self, user: &str) -> Option<&Stake> {
        self.stakes.get(user)
    }

    /// The full ordered lock sequence for `user`, claimed locks included.
    /// Positions are stable for the life of the engine.
    pub fn user_locks(&self, user: &str) -> &[Lock] {
        self.locks.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Reward accrued since `user`'s checkpoint, truncated to whole units.
    pub fn earned(&self, user: &str, now: u64) -> Result<u64> {
        match self.stakes.get(user) {
            Some(stake) => {
                rewards::accrued_reward(stake.amount, self.config.reward_rate_bps, stake.elapsed(now))
            }
            None => Ok(0),
        }
    }

    /// Stake `amount` receipt tokens. Settles any pending accrual at the
    /// pre-stake rate first, then pulls the tokens into custody and resets
    /// the checkpoint.
    pub fn stake(
        &mut self,
        receipt: &mut TokenLedger,
        reward: &mut TokenLedger,
        treasury: &mut Treasury,
        user: &str,
        amount: u64,
        now: u64,
    ) -> Result<()> {
        if amount == 0 {
            return Err(StakingError::ZeroAmount);
        }
        let approved = receipt.allowance(user, &self.account);
        if approved < amount {
            return Err(LedgerError::InsufficientAllowance {
                approved,
                need: amount,
            }
            .into());
        }
        let have = receipt.balance_of(user);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount }.into());
        }
        let staked = self.stakes.get(user).map(|s| s.amount).unwrap_or(0);
        let new_amount = staked.checked_add(amount).ok_or(StakingError::MathOverflow)?;
        let pending = self.earned(user, now)?;
        self.ensure_payable(reward, treasury, pending)?;

        self.settle(reward, treasury, user, pending)?;
        receipt.transfer_from(user, &self.account, &self.account, amount)?;

        if !self.stakes.contains_key(user) {
            self.stakes.insert(user.to_string(), Stake::new(now));
            self.stats.staker_count += 1;
        }
        if let Some(stake) = self.stakes.get_mut(user) {
            stake.amount = new_amount;
            stake.checkpoint(now);
        }
        self.stats.total_staked = self.stats.total_staked.saturating_add(amount);
        Ok(())
    }

    /// Return `amount` staked receipt tokens to `user`, settling pending
    /// accrual first.
    pub fn unstake(
        &mut self,
        receipt: &mut TokenLedger,
        reward: &mut TokenLedger,
        treasury: &mut Treasury,
        user: &str,
        amount: u64,
        now: u64,
    ) -> Result<()> {
        if amount == 0 {
            return Err(StakingError::ZeroAmount);
        }
        let staked = self.stakes.get(user).map(|s| s.amount).unwrap_or(0);
        if staked < amount {
            return Err(StakingError::InsufficientStake {
                staked,
                requested: amount,
            });
        }
        let pending = self.earned(user, now)?;
        self.ensure_payable(reward, treasury, pending)?;

        self.settle(reward, treasury, user, pending)?;
        receipt.transfer(&self.account, user, amount)?;

        if let Some(stake) = self.stakes.get_mut(user) {
            stake.amount -= amount;
            stake.checkpoint(now);
        }
        self.stats.total_staked = self.stats.total_staked.saturating_sub(amount);
        Ok(())
    }

    /// Pay out everything accrued since the checkpoint. All-or-nothing: the
    /// checkpoint advances only when the full owed amount is disbursed.
    /// Returns the amount paid.
    pub fn claim_reward(
        &mut self,
        reward: &mut TokenLedger,
        treasury: &mut Treasury,
        user: &str,
        now: u64,
    ) -> Result<u64> {
        let pending = self.earned(user, now)?;
        self.ensure_payable(reward, treasury, pending)?;

        self.settle(reward, treasury, user, pending)?;
        if let Some(stake) = self.stakes.get_mut(user) {
            stake.checkpoint(now);
        }
        Ok(pending)
    }

    /// Irrevocably burn `amount` of the caller's reward tokens and pay out
    /// the configured bonus multiple from the treasury float. Returns the
    /// payout.
    pub fn burn_for_reward(
        &mut self,
        reward: &mut TokenLedger,
        treasury: &mut Treasury,
        user: &str,
        amount: u64,
    ) -> Result<u64> {
        if amount == 0 {
            return Err(StakingError::ZeroAmount);
        }
        let approved = reward.allowance(user, &self.account);
        if approved < amount {
            return Err(LedgerError::InsufficientAllowance {
                approved,
                need: amount,
            }
            .into());
        }
        let have = reward.balance_of(user);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount }.into());
        }
        let payout = rewards::burn_payout(amount, self.config.burn_bonus_bps)?;
        self.ensure_payable(reward, treasury, payout)?;

        reward.burn_from(user, &self.account, amount)?;
        treasury.disburse(reward, &self.account, user, payout)?;
        self.stats.total_burned = self.stats.total_burned.saturating_add(amount);
        Ok(payout)
    }

    /// Lock `amount` reward tokens for `duration` seconds at the matching
    /// tier's APY. Returns the new lock's index in the user's sequence.
    pub fn lock_reward(
        &mut self,
        reward: &mut TokenLedger,
        user: &str,
        amount: u64,
        duration: u64,
        now: u64,
    ) -> Result<usize> {
        if amount == 0 {
            return Err(StakingError::ZeroAmount);
        }
        let tier = self
            .config
            .tier_for(duration)
            .ok_or(StakingError::UnsupportedDuration { duration })?;
        let apy_bps = tier.apy_bps;
        let approved = reward.allowance(user, &self.account);
        if approved < amount {
            return Err(LedgerError::InsufficientAllowance {
                approved,
                need: amount,
            }
            .into());
        }
        let have = reward.balance_of(user);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount }.into());
        }
        let unlock_time = now.checked_add(duration).ok_or(StakingError::MathOverflow)?;

        reward.transfer_from(user, &self.account, &self.account, amount)?;

        let locks = self.locks.entry(user.to_string()).or_default();
        locks.push(Lock {
            amount,
            start_time: now,
            unlock_time,
            apy_bps,
            claimed: false,
        });
        let index = locks.len() - 1;
        self.stats.total_locked = self.stats.total_locked.saturating_add(amount);
        Ok(index)
    }

    /// Release lock `index` of `user`'s sequence. Mature locks pay principal
    /// plus full-term yield; early exits pay principal minus the flat
    /// penalty and forfeit the yield, with the penalty moving into the
    /// treasury float. Terminal: a second call on the same index fails.
    /// Returns the amount paid to the user.
    pub fn unlock(
        &mut self,
        reward: &mut TokenLedger,
        treasury: &mut Treasury,
        user: &str,
        index: usize,
        now: u64,
    ) -> Result<u64> {
        let lock = *self
            .locks
            .get(user)
            .and_then(|locks| locks.get(index))
            .ok_or(StakingError::LockNotFound { index })?;
        if lock.claimed {
            return Err(StakingError::LockAlreadyClaimed { index });
        }

        let payout = if lock.is_mature(now) {
            let yield_amount = rewards::lock_yield(lock.amount, lock.apy_bps, lock.term())?;
            self.ensure_payable(reward, treasury, yield_amount)?;

            // Principal returns from engine custody; only the yield draws
            // on the float.
            reward.transfer(&self.account, user, lock.amount)?;
            if yield_amount > 0 {
                treasury.disburse(reward, &self.account, user, yield_amount)?;
                self.stats.total_rewards_paid =
                    self.stats.total_rewards_paid.saturating_add(yield_amount);
            }
            lock.amount + yield_amount
        } else {
            let penalty =
                rewards::early_exit_penalty(lock.amount, self.config.early_exit_penalty_bps)?;
            let returned = lock.amount - penalty;

            if returned > 0 {
                reward.transfer(&self.account, user, returned)?;
            }
            if penalty > 0 {
                let treasury_account = treasury.account().to_string();
                reward.transfer(&self.account, &treasury_account, penalty)?;
            }
            returned
        };

        if let Some(lock) = self.locks.get_mut(user).and_then(|locks| locks.get_mut(index)) {
            lock.claimed = true;
        }
        self.stats.total_locked = self.stats.total_locked.saturating_sub(lock.amount);
        Ok(payout)
    }

    /// Pay a fully-guarded pending amount and record it. Callers must have
    /// run `ensure_payable` first.
    fn settle(
        &mut self,
        reward: &mut TokenLedger,
        treasury: &mut Treasury,
        user: &str,
        pending: u64,
    ) -> Result<()> {
        if pending == 0 {
            return Ok(());
        }
        treasury.disburse(reward, &self.account, user, pending)?;
        self.stats.total_rewards_paid = self.stats.total_rewards_paid.saturating_add(pending);
        Ok(())
    }

    /// Guard that a float draw of `amount` would succeed: the engine must be
    /// the authorized staking contract and the float must cover the amount.
    fn ensure_payable(&self, reward: &TokenLedger, treasury: &Treasury, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        if treasury.staking_contract() != Some(self.account.as_str()) {
            return Err(TreasuryError::Unauthorized {
                caller: self.account.clone(),
            }
            .into());
        }
        let available = treasury.float(reward);
        if available < amount {
            return Err(TreasuryError::InsufficientFunds {
                requested: amount,
                available,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_YEAR};
    use ledger::UNIT;

    const GENESIS: u64 = 1_700_000_000;

    fn setup() -> (TokenLedger, TokenLedger, Treasury, StakingEngine) {
        let mut receipt = TokenLedger::new("lbrETH");
        let mut reward = TokenLedger::new("LBR");
        let mut treasury = Treasury::new("treasury", "deployer");
        let engine = StakingEngine::new("engine", StakingConfig::default());

        reward.mint("deployer", 6_000_000 * UNIT).unwrap();
        reward.approve("deployer", "treasury", 6_000_000 * UNIT);
        treasury
            .deposit(&mut reward, "deployer", 6_000_000 * UNIT)
            .unwrap();
        treasury.set_staking_contract("deployer", "engine").unwrap();

        receipt.mint("user", UNIT).unwrap();
        receipt.approve("user", "engine", UNIT);

        (receipt, reward, treasury, engine)
    }

    #[test]
    fn test_stake_requires_allowance() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        receipt.approve("user", "engine", 0);

        let result = engine.stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS);
        assert!(matches!(
            result,
            Err(StakingError::Ledger(LedgerError::InsufficientAllowance { .. }))
        ));
        assert!(engine.stake_of("user").is_none());
    }

    #[test]
    fn test_stake_moves_tokens_into_custody() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();

        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();

        assert_eq!(receipt.balance_of("user"), 0);
        assert_eq!(receipt.balance_of("engine"), UNIT);
        let stake = engine.stake_of("user").unwrap();
        assert_eq!(stake.amount, UNIT);
        assert_eq!(stake.last_claimed, GENESIS);
        assert_eq!(engine.stats().total_staked, UNIT);
        assert_eq!(engine.stats().staker_count, 1);
    }

    #[test]
    fn test_earned_grows_then_resets_on_claim() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();

        let day3 = GENESIS + 3 * SECONDS_PER_DAY;
        let day7 = GENESIS + 7 * SECONDS_PER_DAY;
        let at_3 = engine.earned("user", day3).unwrap();
        let at_7 = engine.earned("user", day7).unwrap();
        assert!(at_3 > 0);
        assert!(at_7 > at_3);

        let paid = engine
            .claim_reward(&mut reward, &mut treasury, "user", day7)
            .unwrap();
        assert_eq!(paid, at_7);
        assert_eq!(reward.balance_of("user"), paid);
        assert_eq!(engine.earned("user", day7).unwrap(), 0);
        assert_eq!(engine.stake_of("user").unwrap().last_claimed, day7);
    }

    #[test]
    fn test_restake_settles_pending_first() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        receipt.mint("user", UNIT).unwrap();
        receipt.approve("user", "engine", 2 * UNIT);

        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();
        let day7 = GENESIS + 7 * SECONDS_PER_DAY;
        let pending = engine.earned("user", day7).unwrap();

        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, day7)
            .unwrap();

        // Pending accrual was paid at the pre-stake rate, not rolled in
        assert_eq!(reward.balance_of("user"), pending);
        let stake = engine.stake_of("user").unwrap();
        assert_eq!(stake.amount, 2 * UNIT);
        assert_eq!(stake.last_claimed, day7);
        assert_eq!(engine.stats().staker_count, 1);
    }

    #[test]
    fn test_claim_all_or_nothing_on_empty_float() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();

        // Drain the float
        let float = treasury.float(&reward);
        treasury
            .disburse(&mut reward, "engine", "deployer", float)
            .unwrap();

        let day7 = GENESIS + 7 * SECONDS_PER_DAY;
        let owed = engine.earned("user", day7).unwrap();
        assert!(owed > 0);

        let result = engine.claim_reward(&mut reward, &mut treasury, "user", day7);
        assert!(matches!(
            result,
            Err(StakingError::Treasury(TreasuryError::InsufficientFunds { .. }))
        ));
        // Checkpoint did not advance; the claim is still owed in full
        assert_eq!(engine.stake_of("user").unwrap().last_claimed, GENESIS);
        assert_eq!(engine.earned("user", day7).unwrap(), owed);
        assert_eq!(reward.balance_of("user"), 0);
    }

    #[test]
    fn test_unstake_returns_receipt_tokens() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();

        let day7 = GENESIS + 7 * SECONDS_PER_DAY;
        let pending = engine.earned("user", day7).unwrap();
        engine
            .unstake(&mut receipt, &mut reward, &mut treasury, "user", UNIT / 2, day7)
            .unwrap();

        assert_eq!(receipt.balance_of("user"), UNIT / 2);
        assert_eq!(reward.balance_of("user"), pending);
        let stake = engine.stake_of("user").unwrap();
        assert_eq!(stake.amount, UNIT / 2);
        assert_eq!(stake.last_claimed, day7);

        let result = engine.unstake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, day7);
        assert!(matches!(result, Err(StakingError::InsufficientStake { .. })));
    }

    #[test]
    fn test_burn_pays_110_percent_from_float() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();
        let day7 = GENESIS + 7 * SECONDS_PER_DAY;
        engine
            .claim_reward(&mut reward, &mut treasury, "user", day7)
            .unwrap();

        let balance = reward.balance_of("user");
        let burn_amount = balance / 2;
        reward.approve("user", "engine", burn_amount);
        let supply_before = reward.total_supply();
        let float_before = treasury.float(&reward);

        let payout = engine
            .burn_for_reward(&mut reward, &mut treasury, "user", burn_amount)
            .unwrap();

        assert_eq!(payout, burn_amount + burn_amount / 10);
        // Net user change: -burn +110% = +10%
        assert_eq!(reward.balance_of("user"), balance - burn_amount + payout);
        // Burn destroys supply; the payout is a float transfer
        assert_eq!(reward.total_supply(), supply_before - burn_amount);
        assert_eq!(treasury.float(&reward), float_before - payout);
        assert_eq!(engine.stats().total_burned, burn_amount);
    }

    #[test]
    fn test_lock_rejects_unknown_duration() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();
        let day7 = GENESIS + 7 * SECONDS_PER_DAY;
        engine
            .claim_reward(&mut reward, &mut treasury, "user", day7)
            .unwrap();
        let balance = reward.balance_of("user");
        reward.approve("user", "engine", balance);

        let result = engine.lock_reward(&mut reward, "user", balance, 17 * SECONDS_PER_DAY, day7);
        assert!(matches!(
            result,
            Err(StakingError::UnsupportedDuration { .. })
        ));
        // No balance change on the rejected lock
        assert_eq!(reward.balance_of("user"), balance);
        assert_eq!(engine.user_locks("user").len(), 0);
    }

    #[test]
    fn test_lock_freezes_tier_apy() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();
        let day7 = GENESIS + 7 * SECONDS_PER_DAY;
        engine
            .claim_reward(&mut reward, &mut treasury, "user", day7)
            .unwrap();
        let amount = reward.balance_of("user");
        reward.approve("user", "engine", amount);

        let index = engine
            .lock_reward(&mut reward, "user", amount, 90 * SECONDS_PER_DAY, day7)
            .unwrap();
        assert_eq!(index, 0);

        let lock = engine.user_locks("user")[0];
        assert_eq!(lock.amount, amount);
        assert_eq!(lock.apy_bps, 1_000);
        assert_eq!(lock.unlock_time, day7 + 90 * SECONDS_PER_DAY);
        assert!(!lock.claimed);
        assert_eq!(reward.balance_of("user"), 0);
        assert_eq!(reward.balance_of("engine"), amount);
    }

    #[test]
    fn test_early_unlock_penalizes_and_forfeits_yield() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();
        let day7 = GENESIS + 7 * SECONDS_PER_DAY;
        engine
            .claim_reward(&mut reward, &mut treasury, "user", day7)
            .unwrap();
        let amount = reward.balance_of("user");
        reward.approve("user", "engine", amount);
        engine
            .lock_reward(&mut reward, "user", amount, 90 * SECONDS_PER_DAY, day7)
            .unwrap();

        let float_before = treasury.float(&reward);
        let day37 = day7 + 30 * SECONDS_PER_DAY;
        let paid = engine
            .unlock(&mut reward, &mut treasury, "user", 0, day37)
            .unwrap();

        let penalty = amount - paid;
        assert!(paid < amount);
        assert!(penalty > 0);
        assert_eq!(reward.balance_of("user"), paid);
        // The withheld penalty lands in the float; early exits never draw it
        assert_eq!(treasury.float(&reward), float_before + penalty);
        assert!(engine.user_locks("user")[0].claimed);
    }

    #[test]
    fn test_mature_unlock_pays_full_term_yield() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();
        let day7 = GENESIS + 7 * SECONDS_PER_DAY;
        engine
            .claim_reward(&mut reward, &mut treasury, "user", day7)
            .unwrap();
        let amount = reward.balance_of("user");
        reward.approve("user", "engine", amount);
        engine
            .lock_reward(&mut reward, "user", amount, 90 * SECONDS_PER_DAY, day7)
            .unwrap();

        let maturity = day7 + 90 * SECONDS_PER_DAY;
        let paid = engine
            .unlock(&mut reward, &mut treasury, "user", 0, maturity)
            .unwrap();

        let expected_yield = (amount as u128 * 1_000 * (90 * SECONDS_PER_DAY) as u128
            / (10_000u128 * SECONDS_PER_YEAR as u128)) as u64;
        assert_eq!(paid, amount + expected_yield);
        assert_eq!(reward.balance_of("user"), paid);
    }

    #[test]
    fn test_unlock_is_terminal() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();
        let day7 = GENESIS + 7 * SECONDS_PER_DAY;
        engine
            .claim_reward(&mut reward, &mut treasury, "user", day7)
            .unwrap();
        let amount = reward.balance_of("user");
        reward.approve("user", "engine", amount);
        engine
            .lock_reward(&mut reward, "user", amount, 90 * SECONDS_PER_DAY, day7)
            .unwrap();

        let maturity = day7 + 90 * SECONDS_PER_DAY;
        engine
            .unlock(&mut reward, &mut treasury, "user", 0, maturity)
            .unwrap();
        let balance_after_first = reward.balance_of("user");

        let result = engine.unlock(&mut reward, &mut treasury, "user", 0, maturity);
        assert_eq!(result, Err(StakingError::LockAlreadyClaimed { index: 0 }));
        // The failed second call changed nothing
        assert_eq!(reward.balance_of("user"), balance_after_first);

        let result = engine.unlock(&mut reward, &mut treasury, "user", 1, maturity);
        assert_eq!(result, Err(StakingError::LockNotFound { index: 1 }));
    }

    #[test]
    fn test_unwired_treasury_rejects_payouts_cleanly() {
        let (mut receipt, mut reward, mut treasury, mut engine) = setup();
        engine
            .stake(&mut receipt, &mut reward, &mut treasury, "user", UNIT, GENESIS)
            .unwrap();

        // Re-point the treasury at a different engine
        treasury.set_staking_contract("deployer", "engine-v2").unwrap();

        let day7 = GENESIS + 7 * SECONDS_PER_DAY;
        let result = engine.claim_reward(&mut reward, &mut treasury, "user", day7);
        assert!(matches!(
            result,
            Err(StakingError::Treasury(TreasuryError::Unauthorized { .. }))
        ));
        assert_eq!(engine.stake_of("user").unwrap().last_claimed, GENESIS);
    }
}
