//! Treasury error types

use thiserror::Error;

use ledger::LedgerError;

/// Treasury errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreasuryError {
    #[error("Insufficient treasury funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: u64, available: u64 },

    #[error("Unauthorized treasury access by {caller}")]
    Unauthorized { caller: String },

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

pub type Result<T> = std::result::Result<T, TreasuryError>;
