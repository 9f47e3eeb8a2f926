//! Staking engine error types

use thiserror::Error;

use ledger::LedgerError;
use treasury::TreasuryError;

/// Staking engine errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StakingError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Treasury error: {0}")]
    Treasury(#[from] TreasuryError),

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Insufficient stake: staked {staked}, requested {requested}")]
    InsufficientStake { staked: u64, requested: u64 },

    #[error("No lock tier for duration {duration}s")]
    UnsupportedDuration { duration: u64 },

    #[error("Lock {index} not found")]
    LockNotFound { index: usize },

    #[error("Lock {index} already claimed")]
    LockAlreadyClaimed { index: usize },

    #[error("Arithmetic overflow")]
    MathOverflow,
}

pub type Result<T> = std::result::Result<T, StakingError>;
