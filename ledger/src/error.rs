//! Ledger error types

use thiserror::Error;

/// Token ledger errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: u64, need: u64 },

    #[error("Insufficient allowance: approved {approved}, need {need}")]
    InsufficientAllowance { approved: u64, need: u64 },

    #[error("Amount overflow")]
    AmountOverflow,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
