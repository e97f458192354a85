//! Front-end requests against the ledger
//!
//! A `LedgerCommand` is what the batch reader produces for each script row
//! and what a [`CommandExecutor`](crate::core::CommandExecutor) consumes.

use super::account::AccountNumber;
use rust_decimal::Decimal;

/// A single ledger request
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    /// Open a new account
    AddAccount {
        account: AccountNumber,
        holder: String,
        initial_balance: Decimal,
    },

    /// Credit an account
    Deposit {
        account: AccountNumber,
        amount: Decimal,
    },

    /// Debit an account
    Withdraw {
        account: AccountNumber,
        amount: Decimal,
    },

    /// Read an account snapshot
    CheckBalance { account: AccountNumber },

    /// Reverse the most recent transaction, restoring onto `account`
    Undo { account: AccountNumber },

    /// Replace the fraud threshold
    SetThreshold { threshold: Decimal },
}

impl LedgerCommand {
    /// Script name of the command
    pub fn name(&self) -> &'static str {
        match self {
            LedgerCommand::AddAccount { .. } => "add",
            LedgerCommand::Deposit { .. } => "deposit",
            LedgerCommand::Withdraw { .. } => "withdraw",
            LedgerCommand::CheckBalance { .. } => "balance",
            LedgerCommand::Undo { .. } => "undo",
            LedgerCommand::SetThreshold { .. } => "threshold",
        }
    }
}
