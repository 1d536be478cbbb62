//! Fundamental types for the stakelock ledger.
//!
//! This crate defines the types shared by every other crate in the workspace:
//! account addresses, timestamps, and the immutable staking parameters.

pub mod address;
pub mod params;
pub mod time;

pub use address::AccountAddress;
pub use params::StakingParams;
pub use time::Timestamp;
