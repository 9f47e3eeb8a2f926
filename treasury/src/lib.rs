//! LBR Treasury Module
//!
//! Holds the reward-token float that backs all staking payouts:
//! - Open funding deposits from any caller
//! - A single authorized staking contract may draw on the float
//! - Cumulative deposit and disbursement accounting
//!
//! The float is the treasury's own balance on the reward-token ledger, so
//! conservation across deposits and disbursements holds by construction.

pub mod error;
pub mod pool;

pub use error::{Result, TreasuryError};
pub use pool::{Treasury, TreasuryStats};
