//! Review queue for flagged transactions
//!
//! First-in-first-out record of every deposit or withdrawal whose amount
//! exceeded the fraud threshold in force when it was applied. The queue is
//! independent of the undo log: undoing a transaction does not remove its
//! review entry, and changing the threshold does not reclassify old entries.
//!
//! # Duplicate Handling
//!
//! None. Every flagged operation is appended, and the queue has no cap.

use crate::types::TransactionEntry;
use std::collections::VecDeque;

/// Queue of flagged transaction entries, oldest first
#[derive(Debug, Clone, Default)]
pub struct ReviewQueue {
    entries: VecDeque<TransactionEntry>,
}

impl ReviewQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        ReviewQueue {
            entries: VecDeque::new(),
        }
    }

    /// Append a flagged entry to the tail
    pub fn flag(&mut self, entry: TransactionEntry) {
        self.entries.push_back(entry);
    }

    /// Number of flagged entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been flagged
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Enumerate entries in flag order
    ///
    /// Enumeration borrows the queue immutably, so it can neither drain nor
    /// reorder it. Each call starts from the oldest entry.
    pub fn iter(&self) -> impl Iterator<Item = &TransactionEntry> + '_ {
        self.entries.iter()
    }
}
