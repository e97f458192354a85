//! Ledger aggregate
//!
//! This module provides the `Ledger`, which owns the account index, the undo
//! log, the review queue and the fraud threshold, and orchestrates every
//! balance-changing operation across them.
//!
//! The ledger enforces business rules such as:
//! - Amounts must be strictly positive
//! - Withdrawals may not exceed the current balance
//! - Every applied operation is pushed onto the undo log
//! - Operations above the fraud threshold are also queued for review
//!
//! Every operation validates before it mutates, so a returned error always
//! means nothing changed.

use crate::core::account_index::{self, AccountIndex};
use crate::core::review_queue::ReviewQueue;
use crate::core::undo_log::UndoLog;
use crate::types::{
    Account, AccountNumber, LedgerError, TransactionEntry, TransactionKind, TransactionReceipt,
    UndoReceipt,
};
use rust_decimal::Decimal;

/// Construction-time settings for a [`Ledger`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerConfig {
    /// Initial fraud threshold; operations strictly above it are flagged
    pub fraud_threshold: Decimal,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            fraud_threshold: Decimal::new(1_000_000, 2),
        }
    }
}

/// In-memory account ledger
///
/// A single owned value replaces any process-wide state: callers construct
/// one, drive it, and drop it.
#[derive(Debug, Clone)]
pub struct Ledger {
    accounts: AccountIndex,
    undo_log: UndoLog,
    review_queue: ReviewQueue,
    fraud_threshold: Decimal,
}

impl Ledger {
    /// Create an empty ledger with the default fraud threshold (10000.00)
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create an empty ledger from explicit settings
    pub fn with_config(config: LedgerConfig) -> Self {
        Ledger {
            accounts: AccountIndex::new(),
            undo_log: UndoLog::new(),
            review_queue: ReviewQueue::new(),
            fraud_threshold: config.fraud_threshold,
        }
    }

    /// Open a new account
    ///
    /// The opening balance is not validated; a negative value is stored as is.
    ///
    /// # Returns
    ///
    /// A snapshot of the stored account
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the account number is already in use.
    pub fn add_account(
        &mut self,
        number: AccountNumber,
        holder: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Account, LedgerError> {
        let account = Account::new(number, holder, initial_balance);
        self.accounts.insert(account.clone())?;
        Ok(account)
    }

    /// Credit an account
    ///
    /// Snapshots the balance, adds the amount, records a deposit entry on the
    /// undo log and flags it for review if the amount exceeds the current
    /// fraud threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist (`AccountNotFound`)
    /// - The amount is zero or negative (`InvalidAmount`)
    /// - The new balance cannot be represented (`ArithmeticOverflow`)
    pub fn deposit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<TransactionReceipt, LedgerError> {
        let account = self
            .accounts
            .find_mut(number)
            .ok_or_else(|| LedgerError::account_not_found(number))?;

        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        let balance_before = account.balance;
        let balance_after = balance_before
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", number))?;
        account.balance = balance_after;

        Ok(self.record(TransactionEntry {
            kind: TransactionKind::Deposit,
            amount,
            balance_before,
            balance_after,
        }))
    }

    /// Debit an account
    ///
    /// Mirrors [`deposit`](Self::deposit) with a withdraw entry. Withdrawing
    /// the entire balance is allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist (`AccountNotFound`)
    /// - The amount is zero or negative (`InvalidAmount`)
    /// - The amount exceeds the current balance (`InsufficientFunds`)
    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<TransactionReceipt, LedgerError> {
        let account = self
            .accounts
            .find_mut(number)
            .ok_or_else(|| LedgerError::account_not_found(number))?;

        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        if amount > account.balance {
            return Err(LedgerError::insufficient_funds(
                number,
                account.balance,
                amount,
            ));
        }

        let balance_before = account.balance;
        let balance_after = balance_before
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdraw", number))?;
        account.balance = balance_after;

        Ok(self.record(TransactionEntry {
            kind: TransactionKind::Withdraw,
            amount,
            balance_before,
            balance_after,
        }))
    }

    /// Snapshot an account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the account does not exist.
    pub fn check_balance(&self, number: AccountNumber) -> Result<Account, LedgerError> {
        self.accounts
            .find(number)
            .cloned()
            .ok_or_else(|| LedgerError::account_not_found(number))
    }

    /// Reverse the most recent transaction
    ///
    /// The undo log is global: this pops the newest entry across all accounts,
    /// not the newest entry of `number`. The account number only selects where
    /// the entry's `balance_before` is written back. Entries do not record
    /// which account produced them, so a mismatch cannot be detected here.
    /// The review queue is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The undo log is empty (`NothingToUndo`), checked first
    /// - The account does not exist (`AccountNotFound`); the log keeps its entry
    pub fn undo_last(&mut self, number: AccountNumber) -> Result<UndoReceipt, LedgerError> {
        if self.undo_log.is_empty() {
            return Err(LedgerError::NothingToUndo);
        }

        let account = self
            .accounts
            .find_mut(number)
            .ok_or_else(|| LedgerError::account_not_found(number))?;

        let entry = self.undo_log.pop().ok_or(LedgerError::NothingToUndo)?;
        account.balance = entry.balance_before;

        Ok(UndoReceipt {
            entry,
            restored_balance: account.balance,
        })
    }

    /// Replace the fraud threshold
    ///
    /// Any value is accepted. Only operations evaluated after this call see
    /// the new threshold; entries already queued stay queued.
    pub fn set_fraud_threshold(&mut self, threshold: Decimal) {
        self.fraud_threshold = threshold;
    }

    /// Current fraud threshold
    pub fn fraud_threshold(&self) -> Decimal {
        self.fraud_threshold
    }

    /// All accounts in ascending account number order
    pub fn list_accounts(&self) -> account_index::Iter<'_> {
        self.accounts.iter()
    }

    /// Flagged entries in flag order
    pub fn list_review_queue(&self) -> impl Iterator<Item = &TransactionEntry> + '_ {
        self.review_queue.iter()
    }

    /// Read access to the account index
    pub fn accounts(&self) -> &AccountIndex {
        &self.accounts
    }

    /// Read access to the undo log
    pub fn undo_log(&self) -> &UndoLog {
        &self.undo_log
    }

    /// Read access to the review queue
    pub fn review_queue(&self) -> &ReviewQueue {
        &self.review_queue
    }

    fn record(&mut self, entry: TransactionEntry) -> TransactionReceipt {
        self.undo_log.record_entry(entry);

        let flagged = entry.amount > self.fraud_threshold;
        if flagged {
            self.review_queue.flag(entry);
        }

        TransactionReceipt {
            entry,
            new_balance: entry.balance_after,
            flagged,
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn ledger_with_account(number: AccountNumber, balance: Decimal) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_account(number, "Alice", balance).unwrap();
        ledger
    }

    #[test]
    fn test_new_ledger_is_empty_with_default_threshold() {
        let ledger = Ledger::new();
        assert_eq!(ledger.fraud_threshold(), dec!(10000));
        assert_eq!(ledger.list_accounts().count(), 0);
        assert_eq!(ledger.list_review_queue().count(), 0);
        assert!(ledger.undo_log().is_empty());
    }

    #[test]
    fn test_with_config_sets_threshold() {
        let ledger = Ledger::with_config(LedgerConfig {
            fraud_threshold: dec!(250.00),
        });
        assert_eq!(ledger.fraud_threshold(), dec!(250.00));
    }

    #[test]
    fn test_add_account_rejects_duplicates() {
        let mut ledger = ledger_with_account(101, dec!(500.00));

        let result = ledger.add_account(101, "Bob", dec!(1.00));

        assert_eq!(result, Err(LedgerError::DuplicateAccount { account: 101 }));
        assert_eq!(ledger.accounts().len(), 1);
        assert_eq!(ledger.check_balance(101).unwrap().holder, "Alice");
    }

    #[test]
    fn test_add_account_allows_negative_opening_balance() {
        let mut ledger = Ledger::new();
        let account = ledger.add_account(5, "Debtor", dec!(-20.00)).unwrap();
        assert_eq!(account.balance, dec!(-20.00));
    }

    #[test]
    fn test_list_accounts_ignores_insertion_order() {
        let mut ledger = Ledger::new();
        for number in [300, 100, 200, 50] {
            ledger.add_account(number, "holder", dec!(0)).unwrap();
        }

        let numbers: Vec<_> = ledger.list_accounts().map(|a| a.number).collect();
        assert_eq!(numbers, vec![50, 100, 200, 300]);
    }

    #[test]
    fn test_deposit_adds_amount_and_records_entry() {
        let mut ledger = ledger_with_account(1, dec!(10.00));

        let receipt = ledger.deposit(1, dec!(2.50)).unwrap();

        assert_eq!(receipt.new_balance, dec!(12.50));
        assert!(!receipt.flagged);
        assert_eq!(
            receipt.entry,
            TransactionEntry {
                kind: TransactionKind::Deposit,
                amount: dec!(2.50),
                balance_before: dec!(10.00),
                balance_after: dec!(12.50),
            }
        );
        assert_eq!(ledger.undo_log().peek(), Some(&receipt.entry));
        assert_eq!(ledger.check_balance(1).unwrap().balance, dec!(12.50));
    }

    #[test]
    fn test_withdraw_subtracts_amount_and_records_entry() {
        let mut ledger = ledger_with_account(1, dec!(10.00));

        let receipt = ledger.withdraw(1, dec!(4.25)).unwrap();

        assert_eq!(receipt.new_balance, dec!(5.75));
        assert_eq!(receipt.entry.kind, TransactionKind::Withdraw);
        assert_eq!(receipt.entry.balance_before, dec!(10.00));
        assert_eq!(ledger.undo_log().len(), 1);
    }

    #[test]
    fn test_withdraw_entire_balance_is_allowed() {
        let mut ledger = ledger_with_account(1, dec!(10.00));
        let receipt = ledger.withdraw(1, dec!(10.00)).unwrap();
        assert_eq!(receipt.new_balance, Decimal::ZERO);
    }

    #[rstest]
    #[case::zero(dec!(0))]
    #[case::negative(dec!(-1.00))]
    fn test_non_positive_amounts_are_rejected(#[case] amount: Decimal) {
        let mut ledger = ledger_with_account(1, dec!(10.00));

        assert_eq!(
            ledger.deposit(1, amount),
            Err(LedgerError::InvalidAmount { amount })
        );
        assert_eq!(
            ledger.withdraw(1, amount),
            Err(LedgerError::InvalidAmount { amount })
        );

        assert_eq!(ledger.check_balance(1).unwrap().balance, dec!(10.00));
        assert!(ledger.undo_log().is_empty());
        assert!(ledger.review_queue().is_empty());
    }

    #[test]
    fn test_unknown_account_is_reported_before_invalid_amount() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.deposit(9, dec!(-1)),
            Err(LedgerError::AccountNotFound { account: 9 })
        );
        assert_eq!(
            ledger.withdraw(9, dec!(1)),
            Err(LedgerError::AccountNotFound { account: 9 })
        );
        assert_eq!(
            ledger.check_balance(9),
            Err(LedgerError::AccountNotFound { account: 9 })
        );
    }

    #[test]
    fn test_withdraw_with_insufficient_funds_changes_nothing() {
        let mut ledger = ledger_with_account(1, dec!(10.00));
        ledger.set_fraud_threshold(dec!(1));

        let result = ledger.withdraw(1, dec!(10.01));

        assert_eq!(
            result,
            Err(LedgerError::InsufficientFunds {
                account: 1,
                balance: dec!(10.00),
                requested: dec!(10.01),
            })
        );
        assert_eq!(ledger.check_balance(1).unwrap().balance, dec!(10.00));
        assert!(ledger.undo_log().is_empty());
        assert!(ledger.review_queue().is_empty());
    }

    #[test]
    fn test_deposit_overflow_changes_nothing() {
        let mut ledger = ledger_with_account(1, Decimal::MAX);

        let result = ledger.deposit(1, Decimal::ONE);

        assert!(matches!(
            result,
            Err(LedgerError::ArithmeticOverflow { .. })
        ));
        assert_eq!(ledger.check_balance(1).unwrap().balance, Decimal::MAX);
        assert!(ledger.undo_log().is_empty());
    }

    #[test]
    fn test_repeated_small_deposits_do_not_drift() {
        let mut ledger = ledger_with_account(1, dec!(0));
        for _ in 0..1000 {
            ledger.deposit(1, dec!(0.10)).unwrap();
        }
        assert_eq!(ledger.check_balance(1).unwrap().balance, dec!(100.00));
    }

    #[rstest]
    #[case::below(dec!(9999.99), false)]
    #[case::equal(dec!(10000.00), false)]
    #[case::above(dec!(10000.01), true)]
    fn test_flagging_is_strictly_above_threshold(#[case] amount: Decimal, #[case] flagged: bool) {
        let mut ledger = ledger_with_account(1, dec!(50000));

        let deposit = ledger.deposit(1, amount).unwrap();
        let withdraw = ledger.withdraw(1, amount).unwrap();

        assert_eq!(deposit.flagged, flagged);
        assert_eq!(withdraw.flagged, flagged);
        let expected_len = if flagged { 2 } else { 0 };
        assert_eq!(ledger.review_queue().len(), expected_len);
    }

    #[test]
    fn test_threshold_change_is_not_retroactive() {
        let mut ledger = ledger_with_account(1, dec!(0));

        ledger.deposit(1, dec!(500)).unwrap();
        ledger.set_fraud_threshold(dec!(100));
        ledger.deposit(1, dec!(150)).unwrap();
        ledger.set_fraud_threshold(dec!(1000));
        ledger.deposit(1, dec!(150)).unwrap();

        let flagged: Vec<_> = ledger.list_review_queue().map(|e| e.amount).collect();
        assert_eq!(flagged, vec![dec!(150)]);
    }

    #[test]
    fn test_non_positive_threshold_flags_every_operation() {
        let mut ledger = ledger_with_account(1, dec!(10));
        ledger.set_fraud_threshold(dec!(-5));

        assert!(ledger.deposit(1, dec!(0.01)).unwrap().flagged);
    }

    #[test]
    fn test_undo_restores_previous_balance() {
        let mut ledger = ledger_with_account(1, dec!(100.00));
        let receipt = ledger.withdraw(1, dec!(30.00)).unwrap();

        let undo = ledger.undo_last(1).unwrap();

        assert_eq!(undo.entry, receipt.entry);
        assert_eq!(undo.restored_balance, dec!(100.00));
        assert_eq!(ledger.check_balance(1).unwrap().balance, dec!(100.00));
        assert!(ledger.undo_log().is_empty());
    }

    #[test]
    fn test_undo_on_empty_log_reports_nothing_to_undo_first() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.undo_last(42), Err(LedgerError::NothingToUndo));
    }

    #[test]
    fn test_undo_with_unknown_account_keeps_the_entry() {
        let mut ledger = ledger_with_account(1, dec!(100.00));
        ledger.deposit(1, dec!(5.00)).unwrap();

        let result = ledger.undo_last(2);

        assert_eq!(result, Err(LedgerError::AccountNotFound { account: 2 }));
        assert_eq!(ledger.undo_log().len(), 1);
        assert_eq!(ledger.check_balance(1).unwrap().balance, dec!(105.00));
    }

    #[test]
    fn test_undo_is_global_across_accounts() {
        let mut ledger = Ledger::new();
        ledger.add_account(1, "Alice", dec!(100.00)).unwrap();
        ledger.add_account(2, "Bob", dec!(20.00)).unwrap();
        ledger.deposit(1, dec!(50.00)).unwrap();
        ledger.deposit(2, dec!(5.00)).unwrap();

        // Pops Bob's deposit but writes its snapshot onto Alice's account.
        let undo = ledger.undo_last(1).unwrap();

        assert_eq!(undo.entry.amount, dec!(5.00));
        assert_eq!(ledger.check_balance(1).unwrap().balance, dec!(20.00));
        assert_eq!(ledger.check_balance(2).unwrap().balance, dec!(25.00));
        assert_eq!(ledger.undo_log().len(), 1);
    }

    #[test]
    fn test_read_only_queries_are_idempotent() {
        let mut ledger = ledger_with_account(1, dec!(100.00));
        ledger.deposit(1, dec!(20000)).unwrap();

        assert_eq!(ledger.check_balance(1), ledger.check_balance(1));
        let first: Vec<_> = ledger.list_accounts().cloned().collect();
        let second: Vec<_> = ledger.list_accounts().cloned().collect();
        assert_eq!(first, second);
        let first: Vec<_> = ledger.list_review_queue().copied().collect();
        let second: Vec<_> = ledger.list_review_queue().copied().collect();
        assert_eq!(first, second);
        assert_eq!(ledger.undo_log().len(), 1);
    }

    #[test]
    fn test_reference_scenario() {
        let mut ledger = Ledger::new();
        ledger.add_account(101, "Alice", dec!(500.00)).unwrap();

        let receipt = ledger.deposit(101, dec!(200.00)).unwrap();
        assert_eq!(receipt.new_balance, dec!(700.00));
        assert!(!receipt.flagged);

        assert!(matches!(
            ledger.withdraw(101, dec!(800.00)),
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert_eq!(ledger.check_balance(101).unwrap().balance, dec!(700.00));

        let receipt = ledger.deposit(101, dec!(15000.00)).unwrap();
        assert_eq!(receipt.new_balance, dec!(15700.00));
        assert!(receipt.flagged);
        assert_eq!(
            ledger.list_review_queue().copied().collect::<Vec<_>>(),
            vec![receipt.entry]
        );

        let undo = ledger.undo_last(101).unwrap();
        assert_eq!(undo.restored_balance, dec!(700.00));
        assert_eq!(ledger.review_queue().len(), 1);
    }
}
