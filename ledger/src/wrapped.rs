//! Wrapped receipt token backed 1:1 by a base-asset reserve

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::token::TokenLedger;

/// A receipt token minted 1:1 against deposited base asset.
///
/// `reserves` always equals the receipt token's total supply: deposits mint,
/// withdrawals burn, and nothing else touches the supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrappedToken {
    token: TokenLedger,
    reserves: u64,
}

impl WrappedToken {
    pub fn new(symbol: &str) -> Self {
        Self {
            token: TokenLedger::new(symbol),
            reserves: 0,
        }
    }

    /// Deposit `amount` base asset and mint the same amount of receipt
    /// tokens to `holder`.
    pub fn deposit(&mut self, holder: &str, amount: u64) -> Result<()> {
        self.token.mint(holder, amount)?;
        self.reserves += amount;
        Ok(())
    }

    /// Burn `amount` of `holder`'s receipt tokens and release the same
    /// amount of base asset, returned to the caller.
    pub fn withdraw(&mut self, holder: &str, amount: u64) -> Result<u64> {
        self.token.burn(holder, amount)?;
        self.reserves -= amount;
        Ok(amount)
    }

    pub fn reserves(&self) -> u64 {
        self.reserves
    }

    pub fn token(&self) -> &TokenLedger {
        &self.token
    }

    pub fn token_mut(&mut self) -> &mut TokenLedger {
        &mut self.token
    }
}
