//! Thread-safe ledger handle for async processing
//!
//! This module provides `SharedLedger`, a cloneable handle around a single
//! [`Ledger`] behind one mutex.
//!
//! # Design
//!
//! A deposit looks the account up, mutates its balance, pushes onto the undo
//! log and maybe onto the review queue. Those steps only appear atomic if one
//! lock covers all of them, so every method here takes the lock exactly once
//! and holds it for the whole ledger operation. There is no finer-grained
//! locking: the undo log is global, so operations on different accounts are
//! still ordered with respect to each other.
//!
//! # Poisoning
//!
//! Ledger operations validate before they mutate and never panic on caller
//! input, so the ledger is consistent between operations. A poisoned lock is
//! therefore recovered rather than propagated.

use crate::core::ledger::{Ledger, LedgerConfig};
use crate::core::traits::CommandExecutor;
use crate::types::{
    Account, AccountNumber, CommandOutcome, LedgerCommand, LedgerError, TransactionEntry,
    TransactionReceipt, UndoReceipt,
};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, thread-safe handle to one ledger
///
/// All clones refer to the same ledger.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    /// Wrap an existing ledger
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Create a handle to a fresh ledger built from `config`
    pub fn with_config(config: LedgerConfig) -> Self {
        Self::new(Ledger::with_config(config))
    }

    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the ledger
    ///
    /// Everything `f` does is one atomic step for other handle holders.
    pub fn with_ledger<T>(&self, f: impl FnOnce(&mut Ledger) -> T) -> T {
        let mut ledger = self.lock();
        f(&mut ledger)
    }

    /// See [`Ledger::add_account`]
    pub fn add_account(
        &self,
        number: AccountNumber,
        holder: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Account, LedgerError> {
        self.lock().add_account(number, holder, initial_balance)
    }

    /// See [`Ledger::deposit`]
    pub fn deposit(
        &self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<TransactionReceipt, LedgerError> {
        self.lock().deposit(number, amount)
    }

    /// See [`Ledger::withdraw`]
    pub fn withdraw(
        &self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<TransactionReceipt, LedgerError> {
        self.lock().withdraw(number, amount)
    }

    /// See [`Ledger::check_balance`]
    pub fn check_balance(&self, number: AccountNumber) -> Result<Account, LedgerError> {
        self.lock().check_balance(number)
    }

    /// See [`Ledger::undo_last`]
    pub fn undo_last(&self, number: AccountNumber) -> Result<UndoReceipt, LedgerError> {
        self.lock().undo_last(number)
    }

    /// See [`Ledger::set_fraud_threshold`]
    pub fn set_fraud_threshold(&self, threshold: Decimal) {
        self.lock().set_fraud_threshold(threshold);
    }

    /// Current fraud threshold
    pub fn fraud_threshold(&self) -> Decimal {
        self.lock().fraud_threshold()
    }

    /// Snapshot of all accounts in ascending account number order
    pub fn list_accounts(&self) -> Vec<Account> {
        self.lock().list_accounts().cloned().collect()
    }

    /// Snapshot of the review queue in flag order
    pub fn list_review_queue(&self) -> Vec<TransactionEntry> {
        self.lock().list_review_queue().copied().collect()
    }

    /// Recover the ledger
    ///
    /// # Errors
    ///
    /// Returns the handle unchanged if other clones are still alive.
    pub fn into_inner(self) -> Result<Ledger, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl CommandExecutor for SharedLedger {
    fn execute(&mut self, command: LedgerCommand) -> Result<CommandOutcome, LedgerError> {
        self.lock().execute(command)
    }
}
