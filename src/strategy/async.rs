//! Asynchronous batch processing strategy
//!
//! This module provides an asynchronous implementation of the ProcessingStrategy
//! trait. The script is read in batches on a multi-threaded tokio runtime and
//! each batch is applied on a worker task against a shared ledger.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, worker_threads)
//!     ├── AsyncReader (batch CSV reading)
//!     └── BatchProcessor (worker task per batch)
//!         └── SharedLedger (Arc<Mutex<Ledger>>)
//! ```
//!
//! # Ordering
//!
//! Batches are applied strictly one after another and commands inside a batch
//! run in file order, so the undo log and review queue come out exactly as
//! the synchronous strategy leaves them. Reading the next batch overlaps only
//! with awaiting the previous one.

use crate::core::r#async::{BatchProcessor, SharedLedger};
use crate::core::{Ledger, LedgerConfig};
use crate::io::async_reader::AsyncReader;
use crate::io::log_outcome;
use crate::strategy::ProcessingStrategy;
use std::path::Path;
use tokio_util::compat::TokioAsyncReadCompatExt;

/// Configuration for batch processing
///
/// Controls how commands are batched and the number of runtime worker threads.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    /// Number of commands per batch
    pub batch_size: usize,
    /// Number of runtime worker threads
    pub worker_threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            worker_threads: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// A zero value is replaced by its default and a warning is logged.
    pub fn new(batch_size: usize, worker_threads: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let worker_threads = if worker_threads == 0 {
            tracing::warn!(
                "Invalid worker_threads ({}), using default ({})",
                worker_threads,
                default.worker_threads
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self {
            batch_size,
            worker_threads,
        }
    }
}

/// Asynchronous batch processing strategy
///
/// # Configuration
///
/// The strategy accepts a BatchConfig with:
/// - `batch_size`: Number of commands per batch (default: 1000)
/// - `worker_threads`: Number of worker threads (default: CPU cores)
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
    ledger_config: LedgerConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig, ledger_config: LedgerConfig) -> Self {
        Self {
            config,
            ledger_config,
        }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Replay the script in batches on a tokio runtime
    ///
    /// 1. Creates a tokio multi-threaded runtime
    /// 2. Opens the file through tokio-util's compat layer for csv-async
    /// 3. Reads batches with AsyncReader until one comes back empty
    /// 4. Applies each batch through the BatchProcessor and logs every outcome
    /// 5. Unwraps the SharedLedger once the last handle is gone
    fn run(&self, input_path: &Path) -> Result<Ledger, String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads)
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        runtime.block_on(async {
            let ledger = SharedLedger::with_config(self.ledger_config);
            let processor = BatchProcessor::new(ledger.clone());

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            let mut reader = AsyncReader::new(file.compat());

            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                for result in processor.process_batch(batch).await? {
                    log_outcome(result.command.name(), &result.result);
                }
            }

            drop(processor);
            ledger
                .into_inner()
                .map_err(|_| "Ledger is still shared after processing".to_string())
        })
    }
}
