//! CSV format handling for command scripts and ledger reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization of script rows
//! - Conversion from CSV records to ledger commands
//! - Account and review queue output serialization
//!
//! All functions are pure (no I/O beyond the writer handed in) for easy testing.

use crate::types::{
    Account, AccountNumber, LedgerCommand, LedgerError, TransactionEntry, TransactionKind,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the script format with columns: command, account, holder, amount.
/// Every column but `command` is optional because each command uses a
/// different subset of them.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub command: String,
    pub account: Option<AccountNumber>,
    pub holder: Option<String>,
    pub amount: Option<String>,
}

/// Review queue row as written to the review CSV
///
/// `kind` goes through serde, so it is written with its lowercase name.
#[derive(Debug, Serialize)]
struct ReviewRecord {
    kind: TransactionKind,
    amount: String,
    balance_before: String,
    balance_after: String,
}

impl From<&TransactionEntry> for ReviewRecord {
    fn from(entry: &TransactionEntry) -> Self {
        ReviewRecord {
            kind: entry.kind,
            amount: format_amount(entry.amount),
            balance_before: format_amount(entry.balance_before),
            balance_after: format_amount(entry.balance_after),
        }
    }
}

/// Render a monetary value with exactly two fraction digits
///
/// Rounds half to even first, then pads, so `7` renders as `7.00` and
/// `0.125` as `0.12`.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Convert a CsvRecord to a LedgerCommand
///
/// This function:
/// - Parses the command name (case-insensitive)
/// - Parses the amount string into a Decimal (if present)
/// - Validates that every field the command needs is present
///
/// Fields a command does not use are ignored. Amount values are not range
/// checked here; the ledger owns that rule.
///
/// # Errors
///
/// - `ParseError` (without a line) if the amount is not a decimal number
/// - `MissingField` if a field the command needs is empty
/// - `InvalidCommand` if the command name is unknown
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<LedgerCommand, LedgerError> {
    let name = csv_record.command.to_lowercase();

    let amount = match csv_record.amount.as_deref().map(str::trim) {
        Some(amount_str) if !amount_str.is_empty() => {
            let decimal = Decimal::from_str(amount_str).map_err(|_| {
                LedgerError::parse_error(format!(
                    "Invalid amount '{}' for {} command",
                    amount_str, name
                ))
            })?;
            Some(decimal)
        }
        _ => None,
    };

    let require_account = |command: &str| {
        csv_record
            .account
            .ok_or_else(|| LedgerError::missing_field(command, "account"))
    };
    let require_amount =
        |command: &str| amount.ok_or_else(|| LedgerError::missing_field(command, "amount"));

    let command = match name.as_str() {
        "add" => LedgerCommand::AddAccount {
            account: require_account("add")?,
            holder: csv_record.holder.clone().unwrap_or_default(),
            initial_balance: require_amount("add")?,
        },
        "deposit" => LedgerCommand::Deposit {
            account: require_account("deposit")?,
            amount: require_amount("deposit")?,
        },
        "withdraw" => LedgerCommand::Withdraw {
            account: require_account("withdraw")?,
            amount: require_amount("withdraw")?,
        },
        "balance" => LedgerCommand::CheckBalance {
            account: require_account("balance")?,
        },
        "undo" => LedgerCommand::Undo {
            account: require_account("undo")?,
        },
        "threshold" => LedgerCommand::SetThreshold {
            threshold: require_amount("threshold")?,
        },
        _ => return Err(LedgerError::invalid_command(&csv_record.command)),
    };

    Ok(command)
}

/// Write account states to CSV format
///
/// Writes accounts in CSV format with columns: account, holder, balance.
/// Accounts are written in the order given; the ledger already yields them
/// in ascending account number order.
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_accounts_csv<'a>(
    accounts: impl IntoIterator<Item = &'a Account>,
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["account", "holder", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for account in accounts {
        writer
            .write_record([
                account.number.to_string(),
                account.holder.clone(),
                format_amount(account.balance),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write the review queue to CSV format
///
/// Columns: kind, amount, balance_before, balance_after, in flag order.
/// The header is written even when the queue is empty.
pub fn write_review_queue_csv<'a>(
    entries: impl IntoIterator<Item = &'a TransactionEntry>,
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::WriterBuilder;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    writer
        .write_record(["kind", "amount", "balance_before", "balance_after"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for entry in entries {
        writer
            .serialize(ReviewRecord::from(entry))
            .map_err(|e| format!("Failed to write review record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
