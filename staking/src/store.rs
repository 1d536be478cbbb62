//! The stake store — owns every mutation of principal and reward bookkeeping.

use std::collections::HashMap;

use crate::accrual;
use crate::error::StakingError;
use crate::event::StakeEvent;
use crate::record::StakeRecord;
use stakelock_token::TokenLedger;
use stakelock_types::{AccountAddress, StakingParams, Timestamp};

const META_PARAMS: &[u8] = b"staking_params";

/// Read-only projection of one account's stake, with reward computed as of
/// the query time rather than the stored checkpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StakeInfo {
    pub principal: u128,
    pub pending_reward: u128,
    pub staked_at: Timestamp,
}

/// Authoritative mapping of account → stake record.
///
/// All mutation goes through `&mut self`, which statically serializes
/// operations — a stake and a withdraw for the same account can never
/// interleave, and the global total is updated in the same exclusive borrow
/// as the record it covers. Callers wanting cross-account parallelism shard
/// stores or wrap one in a lock.
///
/// Every operation is all-or-nothing: validation and settlement run on a
/// working copy, the external transfer is attempted next, and only after it
/// succeeds is anything committed. A failure at any point leaves the store
/// and the token ledger untouched.
#[derive(Debug)]
pub struct StakeStore {
    params: StakingParams,
    records: HashMap<AccountAddress, StakeRecord>,
    total_staked: u128,
    events: Vec<StakeEvent>,
}

impl StakeStore {
    /// Create an empty store for one deployed configuration.
    pub fn new(params: StakingParams) -> Self {
        Self {
            params,
            records: HashMap::new(),
            total_staked: 0,
            events: Vec::new(),
        }
    }

    pub fn params(&self) -> &StakingParams {
        &self.params
    }

    /// Sum of all staked principal across accounts.
    pub fn total_staked(&self) -> u128 {
        self.total_staked
    }

    /// Raw record access for inspection. `None` and a zeroed record mean the
    /// same thing.
    pub fn record(&self, account: &AccountAddress) -> Option<&StakeRecord> {
        self.records.get(account)
    }

    /// Stake `amount` raw units for `account`, pulling them from the account
    /// into custody via the token ledger.
    ///
    /// Restaking settles pending reward first and restarts the lock clock
    /// for the whole principal.
    pub fn stake(
        &mut self,
        ledger: &dyn TokenLedger,
        account: &AccountAddress,
        amount: u128,
        now: Timestamp,
    ) -> Result<(), StakingError> {
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }
        let current = self
            .records
            .get(account)
            .cloned()
            .unwrap_or_else(|| StakeRecord::new(now));
        let (mut settled, _) = accrual::settle(&current, now, self.params.reward_rate)?;
        settled.principal = settled
            .principal
            .checked_add(amount)
            .ok_or(StakingError::AmountOverflow)?;
        settled.staked_at = now;
        let new_total = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::AmountOverflow)?;

        // External pull last among the fallible steps: if the ledger rejects
        // it, nothing has been committed yet.
        ledger
            .transfer_from(account, &self.params.custody, amount)
            .map_err(|e| {
                tracing::warn!(account = %account, amount, error = %e, "stake aborted: pull failed");
                StakingError::TransferFailed(e)
            })?;

        self.records.insert(account.clone(), settled);
        self.total_staked = new_total;
        self.events.push(StakeEvent::Staked {
            account: account.clone(),
            amount,
        });
        tracing::debug!(account = %account, amount, total_staked = self.total_staked, "staked");
        Ok(())
    }

    /// Withdraw `amount` of staked principal back to `account`.
    ///
    /// Permitted only once the lock duration has elapsed since the account's
    /// most recent stake; the lock covers the whole current principal, not a
    /// per-deposit schedule.
    pub fn withdraw(
        &mut self,
        ledger: &dyn TokenLedger,
        account: &AccountAddress,
        amount: u128,
        now: Timestamp,
    ) -> Result<(), StakingError> {
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }
        let current = match self.records.get(account) {
            Some(r) => r.clone(),
            None => {
                return Err(StakingError::InsufficientStake {
                    requested: amount,
                    staked: 0,
                })
            }
        };
        if amount > current.principal {
            return Err(StakingError::InsufficientStake {
                requested: amount,
                staked: current.principal,
            });
        }
        if !current
            .staked_at
            .has_expired(self.params.min_stake_secs, now)
        {
            return Err(StakingError::LockNotExpired {
                remaining_secs: current.staked_at.remaining(self.params.min_stake_secs, now),
            });
        }
        let (mut settled, _) = accrual::settle(&current, now, self.params.reward_rate)?;
        settled.principal = settled
            .principal
            .checked_sub(amount)
            .ok_or(StakingError::AmountOverflow)?;
        let new_total = self
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::AmountOverflow)?;

        ledger
            .transfer(&self.params.custody, account, amount)
            .map_err(|e| {
                tracing::warn!(account = %account, amount, error = %e, "withdraw aborted: push failed");
                StakingError::TransferFailed(e)
            })?;

        self.records.insert(account.clone(), settled);
        self.total_staked = new_total;
        self.events.push(StakeEvent::Withdrawn {
            account: account.clone(),
            amount,
        });
        tracing::debug!(account = %account, amount, total_staked = self.total_staked, "withdrawn");
        Ok(())
    }

    /// Pay out the full pending reward to `account` and zero it.
    ///
    /// Nothing owed is not an error: the transfer is skipped and the emitted
    /// event carries amount zero. Returns the amount paid.
    pub fn claim_reward(
        &mut self,
        ledger: &dyn TokenLedger,
        account: &AccountAddress,
        now: Timestamp,
    ) -> Result<u128, StakingError> {
        let payout = match self.records.get(account) {
            Some(current) => {
                let (mut settled, _) = accrual::settle(current, now, self.params.reward_rate)?;
                let payout = settled.accrued_reward;
                if payout > 0 {
                    ledger
                        .transfer(&self.params.custody, account, payout)
                        .map_err(|e| {
                            tracing::warn!(account = %account, payout, error = %e, "claim aborted: payout failed");
                            StakingError::TransferFailed(e)
                        })?;
                }
                settled.accrued_reward = 0;
                self.records.insert(account.clone(), settled);
                payout
            }
            // Unknown account: zero owed, no record materialized.
            None => 0,
        };
        self.events.push(StakeEvent::RewardClaimed {
            account: account.clone(),
            amount: payout,
        });
        tracing::debug!(account = %account, payout, "reward claimed");
        Ok(payout)
    }

    /// Read-only view of an account's stake with reward projected to `now`.
    /// Never advances the settlement checkpoint.
    pub fn get_stake_info(
        &self,
        account: &AccountAddress,
        now: Timestamp,
    ) -> Result<StakeInfo, StakingError> {
        match self.records.get(account) {
            Some(record) => Ok(StakeInfo {
                principal: record.principal,
                pending_reward: accrual::pending_reward(record, now, self.params.reward_rate)?,
                staked_at: record.staked_at,
            }),
            None => Ok(StakeInfo {
                principal: 0,
                pending_reward: 0,
                staked_at: Timestamp::EPOCH,
            }),
        }
    }

    /// Reward that would be settled for `account` right now. Read-only.
    pub fn calculate_reward(
        &self,
        account: &AccountAddress,
        now: Timestamp,
    ) -> Result<u128, StakingError> {
        match self.records.get(account) {
            Some(record) => accrual::pending_reward(record, now, self.params.reward_rate),
            None => Ok(0),
        }
    }

    /// Take all events emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<StakeEvent> {
        std::mem::take(&mut self.events)
    }
}

impl StakeStore {
    /// Persist params and all records to a state store.
    pub fn save_to_store(
        &self,
        store: &dyn stakelock_store::StakeStateStore,
    ) -> Result<(), StakingError> {
        let params_bytes =
            bincode::serialize(&self.params).map_err(|e| StakingError::Store(e.to_string()))?;
        store
            .put_meta(META_PARAMS, &params_bytes)
            .map_err(|e| StakingError::Store(e.to_string()))?;

        for (account, record) in &self.records {
            let bytes =
                bincode::serialize(record).map_err(|e| StakingError::Store(e.to_string()))?;
            store
                .put_record(account, &bytes)
                .map_err(|e| StakingError::Store(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore a store from persisted state.
    ///
    /// `total_staked` is recomputed from the records, so the sum invariant
    /// holds by construction after a load.
    pub fn load_from_store(
        store: &dyn stakelock_store::StakeStateStore,
    ) -> Result<Self, StakingError> {
        let params_bytes = store
            .get_meta(META_PARAMS)
            .map_err(|e| StakingError::Store(e.to_string()))?
            .ok_or_else(|| StakingError::Store("missing staking params".to_string()))?;
        let params: StakingParams = bincode::deserialize(&params_bytes)
            .map_err(|e| StakingError::Store(e.to_string()))?;

        let entries = store
            .iter_records()
            .map_err(|e| StakingError::Store(e.to_string()))?;
        let mut records = HashMap::new();
        let mut total_staked: u128 = 0;
        for (account, bytes) in entries {
            let record: StakeRecord =
                bincode::deserialize(&bytes).map_err(|e| StakingError::Store(e.to_string()))?;
            total_staked = total_staked
                .checked_add(record.principal)
                .ok_or(StakingError::AmountOverflow)?;
            records.insert(account, record);
        }
        Ok(Self {
            params,
            records,
            total_staked,
            events: Vec::new(),
        })
    }
}
