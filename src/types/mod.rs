//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account record and account number
//! - `transaction`: Transaction entries, receipts and command outcomes
//! - `command`: Front-end requests against the ledger
//! - `error`: Error types for the ledger

pub mod account;
pub mod command;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountNumber};
pub use command::LedgerCommand;
pub use error::LedgerError;
pub use transaction::{
    CommandOutcome, TransactionEntry, TransactionKind, TransactionReceipt, UndoReceipt,
};
