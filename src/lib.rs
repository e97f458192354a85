//! Rust Account Ledger Library
//! # Overview
//!
//! An in-memory account ledger: accounts keyed by number, deposits and
//! withdrawals with a global undo history, and a review queue for
//! transactions above a configurable fraud threshold.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, TransactionEntry, LedgerCommand, LedgerError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::account_index`] - Ordered account storage (unbalanced binary search tree)
//!   - [`core::undo_log`] - Newest-first history of applied transactions
//!   - [`core::review_queue`] - Oldest-first queue of flagged transactions
//!   - [`core::ledger`] - The aggregate enforcing the business rules
//!   - `core::async` - Lock-guarded shared ledger and batch processing
//! - [`io`] - CSV script readers, report writers and the interactive menu
//! - [`strategy`] - Sync and async script replay pipelines
//!
//! # Operations
//!
//! - **Add account**: Store a new account; duplicate numbers are rejected
//! - **Deposit / Withdraw**: Change a balance by a strictly positive amount;
//!   withdrawals may not exceed the balance
//! - **Check balance**: Snapshot an account
//! - **Undo**: Pop the globally newest transaction and restore its prior
//!   balance onto the named account
//! - **Set threshold**: Replace the fraud threshold for later operations
//!
//! # Example
//!
//! ```
//! use rust_account_ledger::Ledger;
//! use rust_decimal::Decimal;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_account(101, "Alice", Decimal::new(500, 0)).unwrap();
//! let receipt = ledger.deposit(101, Decimal::new(15000, 0)).unwrap();
//! assert!(receipt.flagged);
//!
//! let undo = ledger.undo_last(101).unwrap();
//! assert_eq!(undo.restored_balance, Decimal::new(500, 0));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{CommandExecutor, Ledger, LedgerConfig, SharedLedger};
pub use io::{write_accounts_csv, write_review_queue_csv, Shell};
pub use types::{
    Account, AccountNumber, CommandOutcome, LedgerCommand, LedgerError, TransactionEntry,
    TransactionKind, TransactionReceipt, UndoReceipt,
};
