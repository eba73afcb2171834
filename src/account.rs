// Account model
//
// Identity: the integer id, caller-supplied and immutable after creation.
// Values: holder name and balance. Accounts are created with a zero balance
// and mutated in place by deposit/withdraw; there is no delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LedgerError, FIELD_DEPOSIT_AMOUNT};
use crate::money::{format_currency, MinorUnits};

/// Caller-supplied account identifier. Validation (non-negative, unique)
/// happens in the service and store layers.
pub type AccountId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Immutable identity.
    pub id: AccountId,

    /// Account holder name, stored exactly as supplied.
    pub holder: String,

    /// Current balance in minor units (cents).
    pub balance: MinorUnits,

    /// When the account was opened. Not part of the display surface.
    pub opened_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account with a zero balance.
    pub fn new(id: AccountId, holder: String) -> Self {
        Account {
            id,
            holder,
            balance: 0,
            opened_at: Utc::now(),
        }
    }

    /// Credit the balance. Overflow is reported as an invalid amount
    /// rather than wrapping.
    pub fn deposit(&mut self, amount: MinorUnits) -> Result<(), LedgerError> {
        self.balance = self.balance.checked_add(amount).ok_or(
            LedgerError::InvalidArgument {
                field: FIELD_DEPOSIT_AMOUNT,
            },
        )?;
        Ok(())
    }

    /// Debit the balance. The inclusive rule lives here and only here:
    /// withdrawing exactly the full balance succeeds and leaves zero.
    pub fn withdraw(&mut self, amount: MinorUnits) -> Result<(), LedgerError> {
        if self.balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account ID: {}\nAccount Holder: {}\nBalance: {}",
            self.id,
            self.holder,
            format_currency(self.balance)
        )
    }
}
