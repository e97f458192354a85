//! Transaction-related types for the account ledger
//!
//! This module defines the balance-changing transaction kinds, the immutable
//! entries recorded in the undo log and the review queue, and the receipts
//! handed back to callers after a successful operation.

use super::account::Account;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Balance-changing operations supported by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Requires the amount not to exceed the current balance.
    Withdraw,
}

impl TransactionKind {
    /// Lowercase name, as used in CSV output and log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of one applied deposit or withdrawal
///
/// The entry carries balance snapshots but not the account number; undo
/// restores `balance_before` onto whichever account the caller names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionEntry {
    /// Deposit or withdraw
    pub kind: TransactionKind,

    /// Strictly positive amount that was applied
    pub amount: Decimal,

    /// Balance snapshot taken before the operation
    pub balance_before: Decimal,

    /// Balance snapshot taken after the operation
    pub balance_after: Decimal,
}

/// Result of a successful deposit or withdrawal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionReceipt {
    /// The entry pushed onto the undo log
    pub entry: TransactionEntry,

    /// Balance of the account after the operation
    pub new_balance: Decimal,

    /// Whether the entry was also pushed onto the review queue
    pub flagged: bool,
}

/// Result of a successful undo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndoReceipt {
    /// The entry popped off the undo log
    pub entry: TransactionEntry,

    /// Balance written back onto the named account
    pub restored_balance: Decimal,
}

/// Success result of executing a [`LedgerCommand`](super::LedgerCommand)
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// A new account was stored
    AccountAdded(Account),

    /// A deposit or withdrawal was applied
    Applied(TransactionReceipt),

    /// Snapshot returned by a balance query
    Balance(Account),

    /// The most recent transaction was reversed
    Undone(UndoReceipt),

    /// The fraud threshold was replaced
    ThresholdSet(Decimal),
}
