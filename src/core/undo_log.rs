//! Undo log
//!
//! Last-in-first-out history of every applied deposit and withdrawal, across
//! all accounts. The ledger pushes on each successful operation and pops on
//! undo; nothing else mutates it and it is never pruned.

use crate::types::TransactionEntry;

/// Stack of applied transaction entries, newest on top
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    entries: Vec<TransactionEntry>,
}

impl UndoLog {
    /// Create an empty log
    pub fn new() -> Self {
        UndoLog {
            entries: Vec::new(),
        }
    }

    /// Push an entry on top of the log
    pub fn record_entry(&mut self, entry: TransactionEntry) {
        self.entries.push(entry);
    }

    /// The entry the next undo would reverse
    pub fn peek(&self) -> Option<&TransactionEntry> {
        self.entries.last()
    }

    /// Remove and return the newest entry
    pub fn pop(&mut self) -> Option<TransactionEntry> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &TransactionEntry> + '_ {
        self.entries.iter().rev()
    }
}
