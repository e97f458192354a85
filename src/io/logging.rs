//! Outcome logging shared by the script strategies and the interactive menu

use crate::types::{CommandOutcome, LedgerError};

/// Log the result of one executed command
///
/// Rejections go to warn, flagged transactions to info, everything else to debug.
pub fn log_outcome(command: &str, result: &Result<CommandOutcome, LedgerError>) {
    match result {
        Ok(CommandOutcome::Applied(receipt)) if receipt.flagged => tracing::info!(
            command,
            kind = %receipt.entry.kind,
            amount = %receipt.entry.amount,
            new_balance = %receipt.new_balance,
            "Transaction flagged for review"
        ),
        Ok(outcome) => tracing::debug!(command, ?outcome, "Command applied"),
        Err(e) => tracing::warn!(command, "Command rejected: {}", e),
    }
}
