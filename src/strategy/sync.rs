//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of the
//! ProcessingStrategy trait. It coordinates between the SyncReader (for CSV
//! input) and the Ledger (for business rules).
//!
//! # Memory Efficiency
//!
//! Records are streamed one at a time, so memory grows with the number of
//! accounts and the length of the undo log, not with the script itself.

use crate::core::{CommandExecutor, Ledger, LedgerConfig};
use crate::io::log_outcome;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use rust_account_ledger::core::LedgerConfig;
/// use rust_account_ledger::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(LedgerConfig::default());
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("commands.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProcessingStrategy {
    ledger_config: LedgerConfig,
}

impl SyncProcessingStrategy {
    /// Create a strategy whose runs start from `ledger_config`
    pub fn new(ledger_config: LedgerConfig) -> Self {
        Self { ledger_config }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Stream the script through a SyncReader and execute each command in order
    ///
    /// Fatal errors (file not found) are returned immediately. Record and
    /// ledger errors are logged and processing continues.
    fn run(&self, input_path: &Path) -> Result<Ledger, String> {
        let mut ledger = Ledger::with_config(self.ledger_config);
        let mut reader = SyncReader::new(input_path)?;

        while let Some(result) = reader.next() {
            match result {
                Ok(command) => {
                    let name = command.name();
                    let outcome = ledger.execute(command);
                    log_outcome(name, &outcome);
                }
                Err(e) => tracing::warn!(line = reader.line(), "Skipping record: {}", e),
            }
        }

        Ok(ledger)
    }
}
