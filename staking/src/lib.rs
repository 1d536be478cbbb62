//! Staking ledger engine — time-based reward accrual with a minimum-lock
//! withdrawal policy.
//!
//! Rewards accrue linearly: `delta = elapsed × rate × principal`, settled
//! into a pending balance whenever an operation touches the record. Principal
//! is withdrawable only after the lock duration has elapsed since the
//! account's most recent stake.
//!
//! This crate handles:
//! - Per-account stake records and the global staked total
//! - Pure settlement arithmetic (checked, integer-only)
//! - The stake / withdraw / claim operations and their validation
//! - Event emission for external indexers
//! - Persistence through the `stakelock-store` traits

pub mod accrual;
pub mod error;
pub mod event;
pub mod record;
pub mod store;

pub use error::StakingError;
pub use event::StakeEvent;
pub use record::StakeRecord;
pub use store::{StakeInfo, StakeStore};
