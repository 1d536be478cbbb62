//! Staking parameters — fixed at deployment, never mutated afterwards.

use crate::address::AccountAddress;
use serde::{Deserialize, Serialize};

/// Configuration for one deployed staking ledger.
///
/// One stake token, one reward rate, one global lock duration. Amounts are
/// raw (smallest indivisible) token units throughout; the reward rate is an
/// integer so accrual is exact integer arithmetic with no rounding state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingParams {
    /// Reward units granted per second per raw staked unit.
    pub reward_rate: u128,

    /// Seconds an account's principal must remain staked, counted from its
    /// most recent stake, before any withdrawal is permitted.
    pub min_stake_secs: u64,

    /// The account on the external token ledger that holds staked principal
    /// and the reward budget on the store's behalf.
    pub custody: AccountAddress,
}

impl StakingParams {
    pub fn new(reward_rate: u128, min_stake_secs: u64, custody: AccountAddress) -> Self {
        Self {
            reward_rate,
            min_stake_secs,
            custody,
        }
    }
}
