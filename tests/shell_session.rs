// End-to-end menu sessions over in-memory buffers.

use std::io::Cursor;

use bank_ledger::{AccountService, AccountStore, Shell};

fn run_session(script: &str) -> String {
    let service = AccountService::new(AccountStore::new());
    let mut output = Vec::new();
    let mut shell = Shell::new(service, Cursor::new(script.to_string()), &mut output);
    shell.run().expect("session runs to completion");
    String::from_utf8(output).expect("output is utf-8")
}

#[test]
fn full_account_lifecycle() {
    let script = "\
1\n123\nAlice\n\
2\n123\n100\n\
3\n123\n40\n\
4\n123\n\
5\n";
    let out = run_session(script);

    assert!(out.contains("Account added successfully."));
    assert!(out.contains("Deposit completed successfully."));
    assert!(out.contains("Withdrawal completed successfully."));
    assert!(out.contains("Account ID: 123\nAccount Holder: Alice\nBalance: $60.00"));
    assert!(out.contains("Ending the application"));
}

#[test]
fn duplicate_account_then_recovery() {
    let script = "\
1\n7\nAlice\n\
1\n7\nBob\n\
4\n7\n\
5\n";
    let out = run_session(script);

    assert!(out.contains("Account with this id already exists"));
    // Original holder survives the collision
    assert!(out.contains("Account Holder: Alice"));
    assert!(!out.contains("Account Holder: Bob"));
}

#[test]
fn withdraw_exact_balance_reaches_zero() {
    let script = "\
1\n1\nAlice\n\
2\n1\n50\n\
3\n1\n50\n\
4\n1\n\
5\n";
    let out = run_session(script);

    assert!(out.contains("Withdrawal completed successfully."));
    assert!(out.contains("Balance: $0.00"));
}

#[test]
fn errors_surface_as_messages_and_loop_survives() {
    let script = "\
3\n999\n10\n\
2\nabc\n10\n\
1\n5\nCarol\n\
2\n5\n-3\n\
4\n5\n\
5\n";
    let out = run_session(script);

    assert!(out.contains("No account with this id"));
    assert!(out.contains("Account Id needs to be a positive number"));
    assert!(out.contains("Deposit Amount needs to be a positive number"));
    // The failed operations never touched the balance
    assert!(out.contains("Balance: $0.00"));
    assert!(out.contains("Ending the application"));
}

#[test]
fn invalid_menu_choices_keep_prompting() {
    let out = run_session("0\nbanana\n6\n5\n");
    assert_eq!(
        out.matches("Invalid choice. Enter a number from 1 to 5").count(),
        3
    );
    assert_eq!(out.matches("Banking System Menu:").count(), 4);
    assert!(out.contains("Ending the application"));
}
