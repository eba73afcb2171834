// AccountService - validation and orchestration layer
//
// Every public operation takes raw text, parses it against the uniform
// non-negative integer rule, then orchestrates store calls. Amounts are
// whole currency units on the wire and minor units internally.

use crate::account::{Account, AccountId};
use crate::error::{
    LedgerError, FIELD_ACCOUNT_ID, FIELD_DEPOSIT_AMOUNT, FIELD_WITHDRAW_AMOUNT,
};
use crate::money::{from_whole_units, MinorUnits};
use crate::store::AccountStore;

pub struct AccountService {
    store: AccountStore,
}

impl AccountService {
    pub fn new(store: AccountStore) -> Self {
        AccountService { store }
    }

    /// Create an account with a zero balance. The holder name is accepted
    /// as-is; presence checks belong to the presentation layer.
    pub fn add_account(&mut self, id_text: &str, name: &str) -> Result<(), LedgerError> {
        let id = parse_account_id(id_text)?;
        self.store.add(Account::new(id, name.to_string()))
    }

    /// Look up an account for display. Absence is `Ok(None)`, not an error.
    pub fn get_account_by_id(&self, id_text: &str) -> Result<Option<Account>, LedgerError> {
        let id = parse_account_id(id_text)?;
        Ok(self.store.get_by_id(id))
    }

    pub fn deposit_money(&mut self, id_text: &str, amount_text: &str) -> Result<(), LedgerError> {
        let id = parse_account_id(id_text)?;
        let amount = parse_amount(amount_text, FIELD_DEPOSIT_AMOUNT)?;

        let mut account = self.store.get_by_id(id).ok_or(LedgerError::NotFound)?;
        account.deposit(amount)?;
        self.store.update(account)
    }

    pub fn withdraw_money(&mut self, id_text: &str, amount_text: &str) -> Result<(), LedgerError> {
        let id = parse_account_id(id_text)?;
        let amount = parse_amount(amount_text, FIELD_WITHDRAW_AMOUNT)?;

        let mut account = self.store.get_by_id(id).ok_or(LedgerError::NotFound)?;
        account.withdraw(amount)?;
        self.store.update(account)
    }
}

fn parse_account_id(text: &str) -> Result<AccountId, LedgerError> {
    parse_positive(text, FIELD_ACCOUNT_ID)
}

/// Amounts are entered as whole units; widen to minor units after the
/// shared parse. An amount too large to represent is invalid too.
fn parse_amount(text: &str, field: &'static str) -> Result<MinorUnits, LedgerError> {
    let units = parse_positive(text, field)?;
    from_whole_units(units).ok_or(LedgerError::InvalidArgument { field })
}

/// Uniform numeric rule: the text must parse as an integer >= 0.
/// Non-numeric, negative, and empty input all fail the same way.
fn parse_positive(text: &str, field: &'static str) -> Result<i64, LedgerError> {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or(LedgerError::InvalidArgument { field })
}
