//! Abstract storage traits for the staking ledger.
//!
//! Storage backends (embedded KV, in-memory for testing) implement these
//! traits; the staking crate depends only on the traits.

pub mod error;
pub mod stake;

pub use error::StoreError;
pub use stake::StakeStateStore;
