//! Asynchronous, thread-safe access to the ledger
//!
//! # Architecture
//!
//! - **SharedLedger**: One `Ledger` behind one mutex; every operation holds the
//!   lock for its full duration
//! - **BatchProcessor**: Applies command batches on tokio worker tasks
//!
//! # Thread Safety
//!
//! Operations from any number of handles are serialised. Because the undo log
//! is global, there is no per-account parallelism to exploit.

pub mod batch_processor;
pub mod shared_ledger;

pub use batch_processor::{BatchProcessor, ProcessingResult};
pub use shared_ledger::SharedLedger;
