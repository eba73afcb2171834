// AccountStore - in-memory keyed repository
//
// Holds the canonical copy of every account. Constructed once and injected
// into the service layer; never a process-wide global, so tests can build
// as many independent stores as they like and a persistent backend can
// replace this one later.

use std::collections::HashMap;

use crate::account::{Account, AccountId};
use crate::error::LedgerError;

/// Keyed in-memory collection of accounts. Single-threaded use; callers
/// receive clones and write changes back through `update`.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<AccountId, Account>,
}

impl AccountStore {
    pub fn new() -> Self {
        AccountStore {
            accounts: HashMap::new(),
        }
    }

    /// Insert a new account. Fails with `DuplicateKey` if the id is taken;
    /// the existing entry is left untouched.
    pub fn add(&mut self, account: Account) -> Result<(), LedgerError> {
        if self.accounts.contains_key(&account.id) {
            return Err(LedgerError::DuplicateKey);
        }
        self.accounts.insert(account.id, account);
        Ok(())
    }

    /// Fetch by id. Absence is a normal outcome, not an error.
    pub fn get_by_id(&self, id: AccountId) -> Option<Account> {
        self.accounts.get(&id).cloned()
    }

    /// Replace an existing entry wholesale. Fails with `NotFound` if no
    /// entry with that id exists.
    pub fn update(&mut self, account: Account) -> Result<(), LedgerError> {
        if !self.accounts.contains_key(&account.id) {
            return Err(LedgerError::NotFound);
        }
        self.accounts.insert(account.id, account);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
