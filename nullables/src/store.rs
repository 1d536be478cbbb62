//! Nullable state store — in-memory persistence for testing.

use stakelock_store::{StakeStateStore, StoreError};
use stakelock_types::AccountAddress;
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory `StakeStateStore`.
pub struct NullStakeStateStore {
    records: Mutex<HashMap<AccountAddress, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl NullStakeStateStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullStakeStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StakeStateStore for NullStakeStateStore {
    fn get_record(&self, account: &AccountAddress) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.records.lock().unwrap().get(account).cloned())
    }

    fn put_record(&self, account: &AccountAddress, record: &[u8]) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(account.clone(), record.to_vec());
        Ok(())
    }

    fn iter_records(&self) -> Result<Vec<(AccountAddress, Vec<u8>)>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
