//! Transferable balance ledger with allowance-gated transfers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{LedgerError, Result};

/// Smallest token unit (8 decimal places)
pub const UNIT: u64 = 100_000_000;

/// A single token's balance ledger.
///
/// Holders are addressed by opaque strings. Every balance is a disjoint
/// portion of the minted supply, so the sum of all balances never exceeds
/// `total_supply`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenLedger {
    symbol: String,
    balances: HashMap<String, u64>,
    allowances: HashMap<String, HashMap<String, u64>>,
    total_minted: u64,
    total_burned: u64,
}

impl TokenLedger {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            balances: HashMap::new(),
            allowances: HashMap::new(),
            total_minted: 0,
            total_burned: 0,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn balance_of(&self, holder: &str) -> u64 {
        self.balances.get(holder).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> u64 {
        self.total_minted.saturating_sub(self.total_burned)
    }

    pub fn total_minted(&self) -> u64 {
        self.total_minted
    }

    pub fn total_burned(&self) -> u64 {
        self.total_burned
    }

    /// Create `amount` new tokens in `to`'s balance.
    pub fn mint(&mut self, to: &str, amount: u64) -> Result<()> {
        self.total_minted = self
            .total_minted
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        self.credit(to, amount);
        Ok(())
    }

    /// Destroy `amount` tokens from `owner`'s own balance.
    pub fn burn(&mut self, owner: &str, amount: u64) -> Result<()> {
        self.debit(owner, amount)?;
        self.total_burned += amount;
        Ok(())
    }

    /// Destroy `amount` tokens from `owner`'s balance on behalf of an
    /// approved `spender`.
    pub fn burn_from(&mut self, owner: &str, spender: &str, amount: u64) -> Result<()> {
        self.spend_allowance(owner, spender, amount)?;
        self.debit(owner, amount)?;
        self.total_burned += amount;
        Ok(())
    }

    /// Set `spender`'s allowance over `owner`'s balance.
    pub fn approve(&mut self, owner: &str, spender: &str, amount: u64) {
        self.allowances
            .entry(owner.to_string())
            .or_default()
            .insert(spender.to_string(), amount);
    }

    pub fn allowance(&self, owner: &str, spender: &str) -> u64 {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or(0)
    }

    /// Move `amount` from `from` to `to`.
    pub fn transfer(&mut self, from: &str, to: &str, amount: u64) -> Result<()> {
        self.debit(from, amount)?;
        self.credit(to, amount);
        Ok(())
    }

    /// Move `amount` from `owner` to `to` on behalf of an approved
    /// `spender`. The allowance is checked and consumed before any balance
    /// moves.
    pub fn transfer_from(&mut self, owner: &str, spender: &str, to: &str, amount: u64) -> Result<()> {
        let have = self.balance_of(owner);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount });
        }
        self.spend_allowance(owner, spender, amount)?;
        self.debit(owner, amount)?;
        self.credit(to, amount);
        Ok(())
    }

    fn spend_allowance(&mut self, owner: &str, spender: &str, amount: u64) -> Result<()> {
        let approved = self.allowance(owner, spender);
        if approved < amount {
            return Err(LedgerError::InsufficientAllowance {
                approved,
                need: amount,
            });
        }
        self.allowances
            .entry(owner.to_string())
            .or_default()
            .insert(spender.to_string(), approved - amount);
        Ok(())
    }

    fn debit(&mut self, holder: &str, amount: u64) -> Result<()> {
        let have = self.balance_of(holder);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount });
        }
        self.balances.insert(holder.to_string(), have - amount);
        Ok(())
    }

    fn credit(&mut self, holder: &str, amount: u64) {
        // Balances partition the minted supply, so this cannot overflow.
        *self.balances.entry(holder.to_string()).or_insert(0) += amount;
    }
}
