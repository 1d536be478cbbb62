//! Staking-specific errors.

use stakelock_token::TokenError;
use stakelock_types::Timestamp;
use thiserror::Error;

/// Every rejected operation leaves the store, the global total, and the
/// external ledger exactly as they were. No variant is retried internally.
#[derive(Debug, Error)]
pub enum StakingError {
    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("insufficient stake: requested {requested}, staked {staked}")]
    InsufficientStake { requested: u128, staked: u128 },

    #[error("minimum staking time not reached: {remaining_secs}s remaining")]
    LockNotExpired { remaining_secs: u64 },

    #[error("external token transfer failed: {0}")]
    TransferFailed(#[source] TokenError),

    #[error("arithmetic overflow in reward accrual")]
    RewardOverflow,

    #[error("arithmetic overflow in principal bookkeeping")]
    AmountOverflow,

    /// Caller/host-clock bug: `now` precedes the settlement checkpoint.
    /// Not recoverable by retrying with the same inputs.
    #[error("clock regression: last accrual at {last_accrual}, now {now}")]
    ClockRegression {
        last_accrual: Timestamp,
        now: Timestamp,
    },

    #[error("storage error: {0}")]
    Store(String),
}
