// Ledger errors - closed set of domain failures
//
// Each failure kind is a variant with a fixed user-facing message; the shell
// renders the Display text and nothing is ever fatal.

use thiserror::Error;

/// Field names used in `InvalidArgument` messages.
pub const FIELD_ACCOUNT_ID: &str = "Account Id";
pub const FIELD_DEPOSIT_AMOUNT: &str = "Deposit Amount";
pub const FIELD_WITHDRAW_AMOUNT: &str = "Withdraw Amount";

/// Everything that can go wrong between a raw input line and the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A required field was left blank at the prompt.
    /// Carries the full user-facing message ("You must supply ...").
    #[error("{0}")]
    MissingInput(&'static str),

    /// A numeric field failed to parse as a non-negative integer.
    #[error("{field} needs to be a positive number")]
    InvalidArgument { field: &'static str },

    /// Account creation collided with an existing id.
    #[error("Account with this id already exists")]
    DuplicateKey,

    /// Deposit or withdrawal referenced an id that does not exist.
    /// Lookup-for-display treats absence as a normal empty result instead.
    #[error("No account with this id")]
    NotFound,

    /// Withdrawal amount exceeds the current balance.
    #[error("Insufficient balance to withdraw this amount")]
    InsufficientFunds,
}
