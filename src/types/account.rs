//! Account-related types for the account ledger
//!
//! This module defines the Account structure and the account number alias
//! used as the key of the account index.

use rust_decimal::Decimal;

/// Account number
///
/// Any integer is accepted, including negative numbers.
pub type AccountNumber = i64;

/// A holder's account
///
/// Returned by value from balance queries, so a caller always holds an
/// immutable snapshot rather than a handle into the index.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique key of the account, fixed once inserted
    pub number: AccountNumber,

    /// Free-form label for the account holder
    pub holder: String,

    /// Current balance
    ///
    /// Deposits and withdrawals keep this non-negative when it starts that way,
    /// but neither the opening balance nor an undo restore is range-checked.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with the given opening balance
    ///
    /// # Arguments
    ///
    /// * `number` - The account number
    /// * `holder` - The holder label
    /// * `balance` - The opening balance (not validated)
    pub fn new(number: AccountNumber, holder: impl Into<String>, balance: Decimal) -> Self {
        Account {
            number,
            holder: holder.into(),
            balance,
        }
    }
}
