use thiserror::Error;

/// Errors the external token ledger can report.
///
/// The staking engine treats every variant the same way — the operation that
/// triggered the transfer is aborted with no state change — but the variants
/// are preserved so callers can tell a funding problem from a missing
/// approval.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("insufficient token balance: need {needed}, available {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("insufficient allowance: need {needed}, approved {approved}")]
    InsufficientAllowance { needed: u128, approved: u128 },

    #[error("unknown account: {0}")]
    UnknownAccount(String),

    #[error("transfer rejected by the token ledger")]
    Rejected,
}
