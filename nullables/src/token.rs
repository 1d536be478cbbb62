//! Nullable token ledger — in-memory fungible-token balances for testing.

use stakelock_token::{TokenError, TokenLedger};
use stakelock_types::AccountAddress;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// An in-memory fungible-token ledger.
///
/// Implements the same success-or-no-effect contract the engine expects from
/// a real token. `set_reject` forces every subsequent transfer to fail, for
/// exercising rollback paths.
pub struct NullTokenLedger {
    balances: Mutex<HashMap<AccountAddress, u128>>,
    /// Allowance each owner has granted towards pulls (`transfer_from`).
    approvals: Mutex<HashMap<AccountAddress, u128>>,
    reject: AtomicBool,
}

impl NullTokenLedger {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            approvals: Mutex::new(HashMap::new()),
            reject: AtomicBool::new(false),
        }
    }

    /// Credit `amount` to `account` out of thin air.
    pub fn mint(&self, account: &AccountAddress, amount: u128) {
        *self
            .balances
            .lock()
            .unwrap()
            .entry(account.clone())
            .or_default() += amount;
    }

    /// Grant an allowance for pulls from `owner`.
    pub fn approve(&self, owner: &AccountAddress, amount: u128) {
        self.approvals.lock().unwrap().insert(owner.clone(), amount);
    }

    /// Make every subsequent transfer fail with `TokenError::Rejected`.
    pub fn set_reject(&self, reject: bool) {
        self.reject.store(reject, Ordering::SeqCst);
    }

    fn move_tokens(
        &self,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u128,
    ) -> Result<(), TokenError> {
        let mut balances = self.balances.lock().unwrap();
        let available = *balances
            .get(from)
            .ok_or_else(|| TokenError::UnknownAccount(from.to_string()))?;
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        *balances.get_mut(from).unwrap() = available - amount;
        *balances.entry(to.clone()).or_default() += amount;
        Ok(())
    }
}

impl Default for NullTokenLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenLedger for NullTokenLedger {
    fn transfer_from(
        &self,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u128,
    ) -> Result<(), TokenError> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(TokenError::Rejected);
        }
        {
            let mut approvals = self.approvals.lock().unwrap();
            let approved = approvals.get(from).copied().unwrap_or(0);
            if approved < amount {
                return Err(TokenError::InsufficientAllowance {
                    needed: amount,
                    approved,
                });
            }
            // Only reserve the allowance once the balance check passes too.
            let balances = self.balances.lock().unwrap();
            let available = balances.get(from).copied().unwrap_or(0);
            if available < amount {
                return Err(TokenError::InsufficientBalance {
                    needed: amount,
                    available,
                });
            }
            approvals.insert(from.clone(), approved - amount);
        }
        self.move_tokens(from, to, amount)
    }

    fn transfer(
        &self,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u128,
    ) -> Result<(), TokenError> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(TokenError::Rejected);
        }
        self.move_tokens(from, to, amount)
    }

    fn balance_of(&self, account: &AccountAddress) -> u128 {
        self.balances
            .lock()
            .unwrap()
            .get(account)
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> AccountAddress {
        AccountAddress::new(s)
    }

    #[test]
    fn transfer_moves_balances() {
        let ledger = NullTokenLedger::new();
        ledger.mint(&addr("a"), 100);
        ledger.transfer(&addr("a"), &addr("b"), 30).unwrap();
        assert_eq!(ledger.balance_of(&addr("a")), 70);
        assert_eq!(ledger.balance_of(&addr("b")), 30);
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let ledger = NullTokenLedger::new();
        ledger.mint(&addr("a"), 100);
        ledger.approve(&addr("a"), 50);

        ledger.transfer_from(&addr("a"), &addr("vault"), 40).unwrap();
        let err = ledger
            .transfer_from(&addr("a"), &addr("vault"), 20)
            .unwrap_err();
        assert_eq!(
            err,
            TokenError::InsufficientAllowance {
                needed: 20,
                approved: 10
            }
        );
    }

    #[test]
    fn failed_transfer_has_no_effect() {
        let ledger = NullTokenLedger::new();
        ledger.mint(&addr("a"), 10);
        ledger.approve(&addr("a"), 100);

        let err = ledger
            .transfer_from(&addr("a"), &addr("vault"), 50)
            .unwrap_err();
        assert_eq!(
            err,
            TokenError::InsufficientBalance {
                needed: 50,
                available: 10
            }
        );
        // Allowance untouched on a balance failure.
        ledger.transfer_from(&addr("a"), &addr("vault"), 10).unwrap();
    }

    #[test]
    fn reject_mode_fails_everything() {
        let ledger = NullTokenLedger::new();
        ledger.mint(&addr("a"), 100);
        ledger.approve(&addr("a"), 100);
        ledger.set_reject(true);

        assert_eq!(
            ledger.transfer(&addr("a"), &addr("b"), 1).unwrap_err(),
            TokenError::Rejected
        );
        assert_eq!(
            ledger
                .transfer_from(&addr("a"), &addr("b"), 1)
                .unwrap_err(),
            TokenError::Rejected
        );

        ledger.set_reject(false);
        ledger.transfer(&addr("a"), &addr("b"), 1).unwrap();
    }
}
