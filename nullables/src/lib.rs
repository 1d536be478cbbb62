//! Deterministic test doubles for the staking ledger.
//!
//! Nothing here talks to the outside world: time only advances when told to,
//! token balances live in a `HashMap`, and persistence is a pair of maps.

pub mod clock;
pub mod store;
pub mod token;

pub use clock::NullClock;
pub use store::NullStakeStateStore;
pub use token::NullTokenLedger;
