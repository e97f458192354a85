//! Interactive menu front end
//!
//! `Shell` drives a [`Ledger`] from a numbered text menu. It is generic over
//! its input and output so the same loop serves a terminal and tests.
//!
//! ```text
//! 1. Add Account          6. Display Review Queue
//! 2. Deposit              7. Display All Accounts
//! 3. Withdraw             8. Set Fraud Threshold
//! 4. Check Balance        9. Exit
//! 5. Undo Last Transaction
//! ```
//!
//! Unparseable numbers re-prompt for the same field. End of input at any
//! prompt ends the session as if 9 had been chosen.

use crate::core::{CommandExecutor, Ledger};
use crate::io::csv_format::format_amount;
use crate::io::logging::log_outcome;
use crate::types::{AccountNumber, CommandOutcome, LedgerCommand, LedgerError, TransactionKind};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "\n--- MENU ---\n\
    1. Add Account\n\
    2. Deposit\n\
    3. Withdraw\n\
    4. Check Balance\n\
    5. Undo Last Transaction\n\
    6. Display Review Queue\n\
    7. Display All Accounts\n\
    8. Set Fraud Threshold\n\
    9. Exit";

/// Numbered menu session over a ledger
pub struct Shell<R, W> {
    input: R,
    output: W,
    ledger: Ledger,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session that reads from `input` and writes to `output`
    pub fn new(input: R, output: W, ledger: Ledger) -> Self {
        Self {
            input,
            output,
            ledger,
        }
    }

    /// The ledger driven by this session
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// End the session and hand back the ledger
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// Ledger rejections are reported to the user and do not end the loop.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output, "=== Account Ledger with Fraud Review ===")?;

        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt_value::<u32>("Enter choice")? else {
                break;
            };

            let command = match choice {
                1 => self.read_add_account()?,
                2 => self.read_transaction(TransactionKind::Deposit)?,
                3 => self.read_transaction(TransactionKind::Withdraw)?,
                4 => self
                    .prompt_value::<AccountNumber>("Enter account number")?
                    .map(|account| LedgerCommand::CheckBalance { account }),
                5 => self
                    .prompt_value::<AccountNumber>("Enter account number")?
                    .map(|account| LedgerCommand::Undo { account }),
                6 => {
                    self.print_review_queue()?;
                    continue;
                }
                7 => {
                    self.print_accounts()?;
                    continue;
                }
                8 => self
                    .prompt_value::<Decimal>("Enter new fraud threshold")?
                    .map(|threshold| LedgerCommand::SetThreshold { threshold }),
                9 => break,
                _ => {
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                    continue;
                }
            };

            match command {
                Some(command) => self.apply(command)?,
                None => break,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_add_account(&mut self) -> Result<Option<LedgerCommand>, LedgerError> {
        let Some(account) = self.prompt_value::<AccountNumber>("Enter account number")? else {
            return Ok(None);
        };
        let Some(holder) = self.prompt_line("Enter account holder name")? else {
            return Ok(None);
        };
        let Some(initial_balance) = self.prompt_value::<Decimal>("Enter initial balance")? else {
            return Ok(None);
        };

        Ok(Some(LedgerCommand::AddAccount {
            account,
            holder,
            initial_balance,
        }))
    }

    fn read_transaction(
        &mut self,
        kind: TransactionKind,
    ) -> Result<Option<LedgerCommand>, LedgerError> {
        let Some(account) = self.prompt_value::<AccountNumber>("Enter account number")? else {
            return Ok(None);
        };
        let label = match kind {
            TransactionKind::Deposit => "Enter deposit amount",
            TransactionKind::Withdraw => "Enter withdrawal amount",
        };
        let Some(amount) = self.prompt_value::<Decimal>(label)? else {
            return Ok(None);
        };

        Ok(Some(match kind {
            TransactionKind::Deposit => LedgerCommand::Deposit { account, amount },
            TransactionKind::Withdraw => LedgerCommand::Withdraw { account, amount },
        }))
    }

    fn apply(&mut self, command: LedgerCommand) -> Result<(), LedgerError> {
        let name = command.name();
        let result = self.ledger.execute(command);
        log_outcome(name, &result);

        match result {
            Ok(outcome) => self.report(outcome),
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                Ok(())
            }
        }
    }

    fn report(&mut self, outcome: CommandOutcome) -> Result<(), LedgerError> {
        match outcome {
            CommandOutcome::AccountAdded(account) => writeln!(
                self.output,
                "Account {} added for {}.",
                account.number, account.holder
            )?,
            CommandOutcome::Applied(receipt) => {
                let verb = match receipt.entry.kind {
                    TransactionKind::Deposit => "Deposit",
                    TransactionKind::Withdraw => "Withdrawal",
                };
                writeln!(
                    self.output,
                    "{} successful. New balance: ${}",
                    verb,
                    format_amount(receipt.new_balance)
                )?;
                if receipt.flagged {
                    writeln!(
                        self.output,
                        "ALERT: Large transaction of ${} flagged for review.",
                        format_amount(receipt.entry.amount)
                    )?;
                }
            }
            CommandOutcome::Balance(account) => {
                writeln!(self.output, "Account #: {}", account.number)?;
                writeln!(self.output, "Holder: {}", account.holder)?;
                writeln!(self.output, "Balance: ${}", format_amount(account.balance))?;
            }
            CommandOutcome::Undone(receipt) => writeln!(
                self.output,
                "Undid {} of ${}. Balance restored to ${}",
                receipt.entry.kind,
                format_amount(receipt.entry.amount),
                format_amount(receipt.restored_balance)
            )?,
            CommandOutcome::ThresholdSet(threshold) => writeln!(
                self.output,
                "Fraud threshold set to: ${}",
                format_amount(threshold)
            )?,
        }
        Ok(())
    }

    fn print_review_queue(&mut self) -> Result<(), LedgerError> {
        if self.ledger.review_queue().is_empty() {
            writeln!(self.output, "No suspicious transactions.")?;
            return Ok(());
        }

        writeln!(self.output, "\n=== REVIEW QUEUE ===")?;
        for (position, entry) in self.ledger.list_review_queue().enumerate() {
            writeln!(
                self.output,
                "{}. Type: {} | Amount: ${} | Before: ${} | After: ${}",
                position + 1,
                entry.kind,
                format_amount(entry.amount),
                format_amount(entry.balance_before),
                format_amount(entry.balance_after)
            )?;
        }
        Ok(())
    }

    fn print_accounts(&mut self) -> Result<(), LedgerError> {
        if self.ledger.accounts().is_empty() {
            writeln!(self.output, "No accounts in the system.")?;
            return Ok(());
        }

        writeln!(self.output, "\n=== ALL ACCOUNTS ===")?;
        for account in self.ledger.list_accounts() {
            writeln!(
                self.output,
                "Account #: {} | Holder: {} | Balance: ${}",
                account.number,
                account.holder,
                format_amount(account.balance)
            )?;
        }
        Ok(())
    }

    /// Print `label` and read one line; `None` at end of input
    ///
    /// Only the line terminator is removed. Free text such as a holder name
    /// keeps its spaces.
    fn prompt_line(&mut self, label: &str) -> Result<Option<String>, LedgerError> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Prompt until the line parses as `T`; `None` at end of input
    fn prompt_value<T: FromStr>(&mut self, label: &str) -> Result<Option<T>, LedgerError> {
        loop {
            let Some(line) = self.prompt_line(label)? else {
                return Ok(None);
            };
            let line = line.trim();
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid input '{}', please try again.", line)?,
            }
        }
    }
}
