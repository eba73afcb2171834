// Bank Ledger - Core Library
// Exposes all modules for use in the CLI binary and tests

pub mod account;
pub mod error;
pub mod money;
pub mod service;
pub mod shell;
pub mod store;

// Re-export commonly used types
pub use account::{Account, AccountId};
pub use error::LedgerError;
pub use money::{format_currency, MinorUnits};
pub use service::AccountService;
pub use shell::Shell;
pub use store::AccountStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
