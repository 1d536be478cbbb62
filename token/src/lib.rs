//! External fungible-token ledger interface.
//!
//! The staking engine never holds token balances itself; it moves tokens
//! through this trait. Any backend (an on-chain token, a server-side ledger,
//! an in-memory double for tests) implements `TokenLedger` and the engine
//! depends only on the trait.

pub mod error;

pub use error::TokenError;

use stakelock_types::AccountAddress;

/// Capability set of the external fungible token.
///
/// Either a call fully succeeds or it returns an error with no effect; the
/// staking engine relies on that to keep its own bookkeeping all-or-nothing.
pub trait TokenLedger {
    /// Pull `amount` from `from` into `to`, consuming `from`'s prior approval.
    /// Used to take stake into custody.
    fn transfer_from(
        &self,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u128,
    ) -> Result<(), TokenError>;

    /// Push `amount` from the caller's custody account to `to`.
    /// Used to return principal and pay rewards.
    fn transfer(
        &self,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u128,
    ) -> Result<(), TokenError>;

    /// Current balance of `account`. Not used by the engine's accounting;
    /// provided for callers and tests.
    fn balance_of(&self, account: &AccountAddress) -> u128;
}
