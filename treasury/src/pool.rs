//! Treasury float management

use serde::{Deserialize, Serialize};

use ledger::TokenLedger;

use crate::error::{Result, TreasuryError};

/// Cumulative treasury accounting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TreasuryStats {
    pub total_deposited: u64,
    pub total_disbursed: u64,
}

/// The reward-token float holder.
///
/// The treasury is itself an account on the reward ledger; its spendable
/// float is that account's balance. Only the configured staking contract may
/// draw on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treasury {
    account: String,
    owner: String,
    staking_contract: Option<String>,
    stats: TreasuryStats,
}

impl Treasury {
    pub fn new(account: &str, owner: &str) -> Self {
        Self {
            account: account.to_string(),
            owner: owner.to_string(),
            staking_contract: None,
            stats: TreasuryStats::default(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn staking_contract(&self) -> Option<&str> {
        self.staking_contract.as_deref()
    }

    /// Spendable float: the treasury's balance on the reward ledger.
    pub fn float(&self, ledger: &TokenLedger) -> u64 {
        ledger.balance_of(&self.account)
    }

    pub fn stats(&self) -> TreasuryStats {
        self.stats
    }

    /// Name the staking contract allowed to draw on the float. Owner only.
    pub fn set_staking_contract(&mut self, caller: &str, contract: &str) -> Result<()> {
        if caller != self.owner {
            return Err(TreasuryError::Unauthorized {
                caller: caller.to_string(),
            });
        }
        self.staking_contract = Some(contract.to_string());
        Ok(())
    }

    /// Pull `amount` reward tokens from `from` into the float. Open to any
    /// funder with a prior allowance.
    pub fn deposit(&mut self, ledger: &mut TokenLedger, from: &str, amount: u64) -> Result<()> {
        ledger.transfer_from(from, &self.account, &self.account, amount)?;
        self.stats.total_deposited = self.stats.total_deposited.saturating_add(amount);
        Ok(())
    }

    /// Pay `amount` from the float to `to`. Only the configured staking
    /// contract may call this; everyone else is rejected before any check on
    /// the float itself.
    pub fn disburse(
        &mut self,
        ledger: &mut TokenLedger,
        caller: &str,
        to: &str,
        amount: u64,
    ) -> Result<()> {
        if self.staking_contract.as_deref() != Some(caller) {
            return Err(TreasuryError::Unauthorized {
                caller: caller.to_string(),
            });
        }
        let available = self.float(ledger);
        if available < amount {
            return Err(TreasuryError::InsufficientFunds {
                requested: amount,
                available,
            });
        }
        ledger.transfer(&self.account, to, amount)?;
        self.stats.total_disbursed = self.stats.total_disbursed.saturating_add(amount);
        Ok(())
    }
}
