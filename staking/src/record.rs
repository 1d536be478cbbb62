//! Per-account stake record.

use serde::{Deserialize, Serialize};
use stakelock_types::Timestamp;

/// Staking state for a single account.
///
/// Records are never deleted, only zeroed; a zero-principal, zero-reward
/// record is behaviorally identical to no record at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeRecord {
    /// Raw token units currently staked.
    pub principal: u128,

    /// When the current principal was last (re)established. The lock clock
    /// runs from here and covers the whole principal.
    pub staked_at: Timestamp,

    /// Settlement checkpoint: rewards are settled into `accrued_reward`
    /// through this time. Never in the future, never moves backwards.
    pub last_accrual_at: Timestamp,

    /// Reward owed but not yet claimed.
    pub accrued_reward: u128,
}

impl StakeRecord {
    /// A fresh record for an account staking for the first time at `now`.
    pub fn new(now: Timestamp) -> Self {
        Self {
            principal: 0,
            staked_at: now,
            last_accrual_at: now,
            accrued_reward: 0,
        }
    }

    /// Whether this record carries no principal and no unclaimed reward.
    pub fn is_empty(&self) -> bool {
        self.principal == 0 && self.accrued_reward == 0
    }
}
