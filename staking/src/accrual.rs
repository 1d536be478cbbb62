//! Pure reward settlement arithmetic.
//!
//! Accrual is linear and non-compounding: reward is proportional to the
//! product of staked amount and elapsed time, and pending reward earns
//! nothing further unless explicitly restaked. All values are non-negative
//! integers with truncating semantics; overflow is an error, never a wrap.

use crate::error::StakingError;
use crate::record::StakeRecord;
use stakelock_types::Timestamp;

/// Reward newly earned since the record's settlement checkpoint.
///
/// `delta = elapsed × rate × principal`, checked at every step.
pub fn reward_delta(
    record: &StakeRecord,
    now: Timestamp,
    rate: u128,
) -> Result<u128, StakingError> {
    let elapsed = record
        .last_accrual_at
        .checked_elapsed_since(now)
        .ok_or(StakingError::ClockRegression {
            last_accrual: record.last_accrual_at,
            now,
        })?;
    (elapsed as u128)
        .checked_mul(rate)
        .and_then(|r| r.checked_mul(record.principal))
        .ok_or(StakingError::RewardOverflow)
}

/// Total reward that would be owed if settled at `now`: the already-settled
/// balance plus the fresh delta. Read-only; never mutates the record.
pub fn pending_reward(
    record: &StakeRecord,
    now: Timestamp,
    rate: u128,
) -> Result<u128, StakingError> {
    let delta = reward_delta(record, now, rate)?;
    record
        .accrued_reward
        .checked_add(delta)
        .ok_or(StakingError::RewardOverflow)
}

/// Fold newly accrued reward into the record and advance its checkpoint.
///
/// Returns the settled record and the delta that was folded in. The input
/// record is untouched, so a failed caller commits nothing.
pub fn settle(
    record: &StakeRecord,
    now: Timestamp,
    rate: u128,
) -> Result<(StakeRecord, u128), StakingError> {
    let delta = reward_delta(record, now, rate)?;
    let accrued = record
        .accrued_reward
        .checked_add(delta)
        .ok_or(StakingError::RewardOverflow)?;
    let settled = StakeRecord {
        accrued_reward: accrued,
        last_accrual_at: now,
        ..record.clone()
    };
    Ok((settled, delta))
}
