//! Core trait for executing front-end commands
//!
//! This module defines the seam between the front ends (script replay,
//! batch processor) and the ledger, so that the owned `Ledger` and the
//! lock-guarded `SharedLedger` can be driven by the same code.

use crate::core::ledger::Ledger;
use crate::types::{CommandOutcome, LedgerCommand, LedgerError};

/// Trait for applying [`LedgerCommand`]s
pub trait CommandExecutor {
    /// Execute a single command
    ///
    /// # Errors
    ///
    /// Returns the ledger's rejection; the ledger is unchanged in that case.
    fn execute(&mut self, command: LedgerCommand) -> Result<CommandOutcome, LedgerError>;
}

impl CommandExecutor for Ledger {
    fn execute(&mut self, command: LedgerCommand) -> Result<CommandOutcome, LedgerError> {
        match command {
            LedgerCommand::AddAccount {
                account,
                holder,
                initial_balance,
            } => self
                .add_account(account, holder, initial_balance)
                .map(CommandOutcome::AccountAdded),
            LedgerCommand::Deposit { account, amount } => {
                self.deposit(account, amount).map(CommandOutcome::Applied)
            }
            LedgerCommand::Withdraw { account, amount } => {
                self.withdraw(account, amount).map(CommandOutcome::Applied)
            }
            LedgerCommand::CheckBalance { account } => {
                self.check_balance(account).map(CommandOutcome::Balance)
            }
            LedgerCommand::Undo { account } => self.undo_last(account).map(CommandOutcome::Undone),
            LedgerCommand::SetThreshold { threshold } => {
                self.set_fraud_threshold(threshold);
                Ok(CommandOutcome::ThresholdSet(threshold))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;
    use rust_decimal_macros::dec;

    #[test]
    fn test_execute_routes_every_command() {
        let mut ledger = Ledger::new();

        let added = ledger
            .execute(LedgerCommand::AddAccount {
                account: 7,
                holder: "Carol".to_string(),
                initial_balance: dec!(10.00),
            })
            .unwrap();
        assert_eq!(
            added,
            CommandOutcome::AccountAdded(Account::new(7, "Carol", dec!(10.00)))
        );

        let deposited = ledger
            .execute(LedgerCommand::Deposit {
                account: 7,
                amount: dec!(5.00),
            })
            .unwrap();
        assert!(matches!(deposited, CommandOutcome::Applied(r) if r.new_balance == dec!(15.00)));

        let withdrawn = ledger
            .execute(LedgerCommand::Withdraw {
                account: 7,
                amount: dec!(1.00),
            })
            .unwrap();
        assert!(matches!(withdrawn, CommandOutcome::Applied(r) if r.new_balance == dec!(14.00)));

        let balance = ledger
            .execute(LedgerCommand::CheckBalance { account: 7 })
            .unwrap();
        assert_eq!(
            balance,
            CommandOutcome::Balance(Account::new(7, "Carol", dec!(14.00)))
        );

        let undone = ledger.execute(LedgerCommand::Undo { account: 7 }).unwrap();
        assert!(matches!(undone, CommandOutcome::Undone(r) if r.restored_balance == dec!(15.00)));

        let threshold = ledger
            .execute(LedgerCommand::SetThreshold {
                threshold: dec!(99),
            })
            .unwrap();
        assert_eq!(threshold, CommandOutcome::ThresholdSet(dec!(99)));
        assert_eq!(ledger.fraud_threshold(), dec!(99));
    }

    #[test]
    fn test_execute_propagates_rejections() {
        let mut ledger = Ledger::new();
        let result = ledger.execute(LedgerCommand::Undo { account: 1 });
        assert_eq!(result, Err(LedgerError::NothingToUndo));
    }
}
