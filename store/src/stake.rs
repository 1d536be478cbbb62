use crate::StoreError;
use stakelock_types::AccountAddress;

/// Store trait for persisting staking engine state to durable storage.
///
/// Records are opaque `Vec<u8>` so the store doesn't depend on the staking
/// crate (which would create a circular dependency). The staking engine
/// serializes/deserializes its own types.
pub trait StakeStateStore {
    fn get_record(&self, account: &AccountAddress) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_record(&self, account: &AccountAddress, record: &[u8]) -> Result<(), StoreError>;
    fn iter_records(&self) -> Result<Vec<(AccountAddress, Vec<u8>)>, StoreError>;

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}
