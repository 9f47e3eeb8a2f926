//! LBR Ledger Module
//!
//! Account-keyed token ledgers for the LBR protocol:
//! - Transferable balances with owner/spender allowances
//! - Mint and burn with cumulative supply accounting
//! - The wrapped receipt token backed 1:1 by a base-asset reserve

pub mod error;
pub mod token;
pub mod wrapped;

pub use error::{LedgerError, Result};
pub use token::{TokenLedger, UNIT};
pub use wrapped::WrappedToken;
