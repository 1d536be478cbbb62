//! Observable events for external indexers.

use serde::{Deserialize, Serialize};
use stakelock_types::AccountAddress;

/// Emitted by the store after each committed operation.
///
/// Informational only — accounting correctness never depends on events being
/// consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StakeEvent {
    Staked {
        account: AccountAddress,
        amount: u128,
    },
    Withdrawn {
        account: AccountAddress,
        amount: u128,
    },
    RewardClaimed {
        account: AccountAddress,
        amount: u128,
    },
}
