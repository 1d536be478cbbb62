//! End-to-end lifecycle against the nullable collaborators: two funded
//! users, a deployed store, and a clock that only moves when told to.

use stakelock_nullables::{NullClock, NullTokenLedger};
use stakelock_staking::{StakeEvent, StakeStore, StakingError};
use stakelock_token::TokenLedger;
use stakelock_types::{AccountAddress, StakingParams, Timestamp};

const REWARD_RATE: u128 = 10;
const MIN_STAKING_TIME: u64 = 3600;
const USER_FUNDS: u128 = 10_000;

struct Harness {
    clock: NullClock,
    ledger: NullTokenLedger,
    store: StakeStore,
    user1: AccountAddress,
    user2: AccountAddress,
}

impl Harness {
    fn new() -> Self {
        let custody = AccountAddress::new("staking-custody");
        let user1 = AccountAddress::new("user1");
        let user2 = AccountAddress::new("user2");

        let ledger = NullTokenLedger::new();
        for user in [&user1, &user2] {
            ledger.mint(user, USER_FUNDS);
            ledger.approve(user, USER_FUNDS);
        }
        // Reward budget lives in custody alongside staked principal.
        ledger.mint(&custody, 1_000_000_000);

        Self {
            clock: NullClock::new(0),
            ledger,
            store: StakeStore::new(StakingParams::new(REWARD_RATE, MIN_STAKING_TIME, custody)),
            user1,
            user2,
        }
    }

    fn now(&self) -> Timestamp {
        self.clock.now()
    }
}

#[test]
fn users_can_stake_tokens() {
    let mut h = Harness::new();

    h.store.stake(&h.ledger, &h.user1, 1000, h.now()).unwrap();

    let info = h.store.get_stake_info(&h.user1, h.now()).unwrap();
    assert_eq!(info.principal, 1000);
    assert_eq!(h.store.total_staked(), 1000);
    assert_eq!(h.ledger.balance_of(&h.user1), USER_FUNDS - 1000);
}

#[test]
fn staking_emits_the_staked_event() {
    let mut h = Harness::new();

    h.store.stake(&h.ledger, &h.user1, 1000, h.now()).unwrap();

    assert_eq!(
        h.store.drain_events(),
        vec![StakeEvent::Staked {
            account: h.user1.clone(),
            amount: 1000
        }]
    );
}

#[test]
fn staking_zero_tokens_is_rejected() {
    let mut h = Harness::new();

    let err = h.store.stake(&h.ledger, &h.user1, 0, h.now()).unwrap_err();
    assert!(matches!(err, StakingError::InvalidAmount));
}

#[test]
fn withdrawal_respects_the_minimum_staking_time() {
    let mut h = Harness::new();

    h.store.stake(&h.ledger, &h.user1, 1000, h.now()).unwrap();

    h.clock.advance(MIN_STAKING_TIME - 1);
    let err = h
        .store
        .withdraw(&h.ledger, &h.user1, 500, h.now())
        .unwrap_err();
    assert!(matches!(err, StakingError::LockNotExpired { .. }));

    h.clock.advance(2);
    h.store.withdraw(&h.ledger, &h.user1, 500, h.now()).unwrap();

    let info = h.store.get_stake_info(&h.user1, h.now()).unwrap();
    assert_eq!(info.principal, 500);
    assert_eq!(h.ledger.balance_of(&h.user1), USER_FUNDS - 500);
}

#[test]
fn rewards_accrue_and_can_be_claimed() {
    let mut h = Harness::new();

    h.store.stake(&h.ledger, &h.user1, 1000, h.now()).unwrap();

    h.clock.advance(100);
    let reward = h.store.calculate_reward(&h.user1, h.now()).unwrap();
    assert_eq!(reward, 100 * REWARD_RATE * 1000);

    let balance_before = h.ledger.balance_of(&h.user1);
    let paid = h.store.claim_reward(&h.ledger, &h.user1, h.now()).unwrap();
    assert_eq!(paid, reward);
    assert_eq!(h.ledger.balance_of(&h.user1), balance_before + reward);

    // Principal untouched, pending reward reset.
    let info = h.store.get_stake_info(&h.user1, h.now()).unwrap();
    assert_eq!(info.principal, 1000);
    assert_eq!(info.pending_reward, 0);
}

#[test]
fn accounts_accrue_independently() {
    let mut h = Harness::new();

    h.store.stake(&h.ledger, &h.user1, 1000, h.now()).unwrap();
    h.clock.advance(50);
    h.store.stake(&h.ledger, &h.user2, 2000, h.now()).unwrap();
    h.clock.advance(50);

    // user1: 100s at 1000 staked; user2: 50s at 2000 staked.
    assert_eq!(
        h.store.calculate_reward(&h.user1, h.now()).unwrap(),
        100 * REWARD_RATE * 1000
    );
    assert_eq!(
        h.store.calculate_reward(&h.user2, h.now()).unwrap(),
        50 * REWARD_RATE * 2000
    );
    assert_eq!(h.store.total_staked(), 3000);

    // Claiming for one account leaves the other untouched.
    h.store.claim_reward(&h.ledger, &h.user1, h.now()).unwrap();
    assert_eq!(
        h.store.calculate_reward(&h.user2, h.now()).unwrap(),
        50 * REWARD_RATE * 2000
    );
}

#[test]
fn a_rejecting_ledger_aborts_operations_cleanly() {
    let mut h = Harness::new();

    h.store.stake(&h.ledger, &h.user1, 1000, h.now()).unwrap();
    h.clock.advance(MIN_STAKING_TIME);

    h.ledger.set_reject(true);
    let err = h
        .store
        .withdraw(&h.ledger, &h.user1, 1000, h.now())
        .unwrap_err();
    assert!(matches!(err, StakingError::TransferFailed(_)));
    assert_eq!(h.store.total_staked(), 1000);

    h.ledger.set_reject(false);
    h.store.withdraw(&h.ledger, &h.user1, 1000, h.now()).unwrap();
    assert_eq!(h.store.total_staked(), 0);
    assert_eq!(h.ledger.balance_of(&h.user1), USER_FUNDS);
}
