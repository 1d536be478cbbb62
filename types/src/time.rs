//! Timestamp type used throughout the ledger.
//!
//! Timestamps are Unix epoch seconds (UTC) supplied by the host at call time.
//! The engine never reads a clock itself; it only compares timestamps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds elapsed from this timestamp to `now`, or `None` if `now`
    /// precedes this timestamp (a host-clock regression).
    pub fn checked_elapsed_since(&self, now: Timestamp) -> Option<u64> {
        now.0.checked_sub(self.0)
    }

    /// Whether this timestamp + duration has passed relative to `now`.
    pub fn has_expired(&self, duration_secs: u64, now: Timestamp) -> bool {
        now.0 >= self.0.saturating_add(duration_secs)
    }

    /// Seconds still missing until this timestamp + duration passes.
    /// Zero once expired.
    pub fn remaining(&self, duration_secs: u64, now: Timestamp) -> u64 {
        self.0.saturating_add(duration_secs).saturating_sub(now.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_checked_against_regression() {
        let t = Timestamp::new(100);
        assert_eq!(t.checked_elapsed_since(Timestamp::new(150)), Some(50));
        assert_eq!(t.checked_elapsed_since(Timestamp::new(100)), Some(0));
        assert_eq!(t.checked_elapsed_since(Timestamp::new(99)), None);
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let t = Timestamp::new(1000);
        assert!(!t.has_expired(3600, Timestamp::new(4599)));
        assert!(t.has_expired(3600, Timestamp::new(4600)));
        assert!(t.has_expired(3600, Timestamp::new(4601)));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let t = Timestamp::new(0);
        assert_eq!(t.remaining(3600, Timestamp::new(3599)), 1);
        assert_eq!(t.remaining(3600, Timestamp::new(3600)), 0);
        assert_eq!(t.remaining(3600, Timestamp::new(5000)), 0);
    }
}
