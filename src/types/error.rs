//! Error types for the account ledger
//!
//! This module defines every error the ledger and its front ends can report.
//! All of them are recoverable: a rejected operation leaves the ledger exactly
//! as it was, and the caller decides whether to retry or move on.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: Duplicate or unknown accounts, invalid amounts,
//!   insufficient funds, empty undo log
//! - **Arithmetic Errors**: Balance overflow in checked decimal arithmetic
//! - **Script Errors**: I/O failures, malformed CSV, unknown commands, missing fields

use super::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// An account with this number is already stored
    ///
    /// The index is left unchanged.
    #[error("Account {account} already exists")]
    DuplicateAccount {
        /// The account number that collided
        account: AccountNumber,
    },

    /// No account with this number is stored
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The account number that was looked up
        account: AccountNumber,
    },

    /// Amount is zero or negative
    #[error("Invalid amount {amount}: must be greater than zero")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Undo requested with an empty undo log
    #[error("No transactions to undo")]
    NothingToUndo,

    /// Balance arithmetic would overflow the decimal range
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// I/O error while reading a script or writing a report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error in a command script
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown command name in a command script
    #[error("Invalid command '{command}'")]
    InvalidCommand {
        /// The unrecognised command string
        command: String,
    },

    /// A field the command needs is empty or unparseable
    #[error("{command} command requires a valid {field}")]
    MissingField {
        /// Command name
        command: String,
        /// Field name
        field: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for LedgerError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a ParseError without a known line
    pub fn parse_error(message: impl Into<String>) -> Self {
        LedgerError::ParseError {
            line: None,
            message: message.into(),
        }
    }

    /// Attach a script line number to a ParseError that has none
    ///
    /// Every other variant is returned unchanged.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            LedgerError::ParseError {
                line: None,
                message,
            } => LedgerError::ParseError {
                line: Some(line),
                message,
            },
            other => other,
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: AccountNumber) -> Self {
        LedgerError::DuplicateAccount { account }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(command: &str) -> Self {
        LedgerError::InvalidCommand {
            command: command.to_string(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(command: &str, field: &str) -> Self {
        LedgerError::MissingField {
            command: command.to_string(),
            field: field.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::duplicate_account(
        LedgerError::DuplicateAccount { account: 101 },
        "Account 101 already exists"
    )]
    #[case::account_not_found(
        LedgerError::AccountNotFound { account: 404 },
        "Account 404 not found"
    )]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { amount: dec!(-5.00) },
        "Invalid amount -5.00: must be greater than zero"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { account: 101, balance: dec!(700.00), requested: dec!(800.00) },
        "Insufficient funds in account 101: balance 700.00, requested 800.00"
    )]
    #[case::nothing_to_undo(LedgerError::NothingToUndo, "No transactions to undo")]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), account: 1 },
        "Arithmetic overflow in deposit for account 1"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_command(
        LedgerError::InvalidCommand { command: "transfer".to_string() },
        "Invalid command 'transfer'"
    )]
    #[case::missing_field(
        LedgerError::MissingField { command: "deposit".to_string(), field: "amount".to_string() },
        "deposit command requires a valid amount"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::duplicate_account(
        LedgerError::duplicate_account(101),
        LedgerError::DuplicateAccount { account: 101 }
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds(1, dec!(0.50), dec!(1.00)),
        LedgerError::InsufficientFunds { account: 1, balance: dec!(0.50), requested: dec!(1.00) }
    )]
    #[case::missing_field(
        LedgerError::missing_field("add", "holder"),
        LedgerError::MissingField { command: "add".to_string(), field: "holder".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case::fills_missing_line(
        LedgerError::parse_error("Invalid amount 'x' for deposit command"),
        LedgerError::ParseError { line: Some(7), message: "Invalid amount 'x' for deposit command".to_string() }
    )]
    #[case::keeps_existing_line(
        LedgerError::ParseError { line: Some(3), message: "bad".to_string() },
        LedgerError::ParseError { line: Some(3), message: "bad".to_string() }
    )]
    #[case::ignores_other_variants(
        LedgerError::invalid_command("transfer"),
        LedgerError::InvalidCommand { command: "transfer".to_string() }
    )]
    fn test_at_line(#[case] error: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(error.at_line(7), expected);
    }

    #[test]
    fn test_csv_error_conversion_carries_line() {
        let data = "command,account\ndeposit,1\ndeposit,abc\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let error = reader
            .deserialize::<(String, i64)>()
            .find_map(Result::err)
            .expect("second record fails to deserialize");

        let error: LedgerError = error.into();
        assert!(matches!(error, LedgerError::ParseError { line: Some(3), .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
