use anyhow::Result;
use std::io;

use bank_ledger::{AccountService, AccountStore, Shell};

fn main() -> Result<()> {
    // One store for the whole process, injected down the stack.
    let store = AccountStore::new();
    let service = AccountService::new(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(service, stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}
