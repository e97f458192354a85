//! Processing strategy module for command script replay
//!
//! This module defines the Strategy pattern for complete replay pipelines,
//! encompassing both CSV parsing and ledger execution. This allows different
//! processing implementations (synchronous, asynchronous batch) to be selected at runtime.

use crate::cli::StrategyType;
use crate::core::{Ledger, LedgerConfig};
use crate::io::csv_format::write_accounts_csv;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete replay pipelines
///
/// Each strategy reads commands from a CSV script, applies them to a fresh
/// ledger in file order and hands the ledger back for reporting.
pub trait ProcessingStrategy: Send + Sync {
    /// Replay every command in `input_path` against a new ledger
    ///
    /// Malformed records and commands the ledger rejects are logged and
    /// skipped; they never abort the replay.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - The async runtime cannot be built or a batch task fails
    fn run(&self, input_path: &Path) -> Result<Ledger, String>;

    /// Replay `input_path` and write the final account states to `output`
    ///
    /// # Errors
    ///
    /// Returns the fatal errors of [`run`](Self::run), or a message if the
    /// output cannot be written.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let ledger = self.run(input_path)?;
        write_accounts_csv(ledger.list_accounts(), output)
    }
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `batch_config` - Optional configuration for async batch processing (ignored for sync)
/// * `ledger_config` - Settings for the ledger each run starts from
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    batch_config: Option<BatchConfig>,
    ledger_config: LedgerConfig,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(ledger_config)),
        StrategyType::Async => {
            let config = batch_config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, ledger_config))
        }
    }
}
