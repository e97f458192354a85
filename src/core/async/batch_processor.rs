//! Batch processing for async command replay
//!
//! This module provides the `BatchProcessor` struct, which applies a batch of
//! ledger commands on a spawned tokio task against a [`SharedLedger`].
//!
//! # Ordering
//!
//! Undo always reverses the globally newest transaction, and the review queue
//! records flag order, so the order in which commands reach the ledger is
//! observable across accounts. Commands are therefore never partitioned: a
//! batch is applied in input order while holding the ledger lock for each
//! command, and the caller awaits one batch before submitting the next.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     └── SharedLedger  (Arc<Mutex<Ledger>>)
//! ```

use super::SharedLedger;
use crate::core::traits::CommandExecutor;
use crate::types::{CommandOutcome, LedgerCommand, LedgerError};

/// Result of executing a single command
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// The command that was executed
    pub command: LedgerCommand,

    /// The outcome of executing it
    pub result: Result<CommandOutcome, LedgerError>,
}

/// Applies command batches to a shared ledger
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    ledger: SharedLedger,
}

impl BatchProcessor {
    /// Create a new BatchProcessor driving `ledger`
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Execute commands in order, capturing every outcome
    ///
    /// Rejections do not stop the batch.
    pub fn apply_in_order(&self, commands: Vec<LedgerCommand>) -> Vec<ProcessingResult> {
        let mut ledger = self.ledger.clone();

        commands
            .into_iter()
            .map(|command| {
                let result = ledger.execute(command.clone());
                ProcessingResult { command, result }
            })
            .collect()
    }

    /// Process a batch on a worker task
    ///
    /// # Returns
    ///
    /// The outcome of each command, in input order.
    ///
    /// # Errors
    ///
    /// Returns a message if the worker task panicked or was cancelled. Commands
    /// applied before the failure stay applied.
    pub async fn process_batch(
        &self,
        batch: Vec<LedgerCommand>,
    ) -> Result<Vec<ProcessingResult>, String> {
        let processor = self.clone();

        tokio::spawn(async move { processor.apply_in_order(batch) })
            .await
            .map_err(|e| format!("Batch task failed: {}", e))
    }
}
