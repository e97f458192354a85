//! Core business logic module
//!
//! This module contains the ledger components:
//! - `account_index` - Unbalanced binary search tree of accounts
//! - `undo_log` - LIFO history of applied transactions
//! - `review_queue` - FIFO queue of transactions above the fraud threshold
//! - `ledger` - The aggregate that owns all of the above
//! - `traits` - Command execution seam shared by the owned and shared ledgers
//! - `async` - Thread-safe ledger handle and batch processing

pub mod account_index;
pub mod r#async;
pub mod ledger;
pub mod review_queue;
pub mod traits;
pub mod undo_log;

pub use account_index::AccountIndex;
pub use ledger::{Ledger, LedgerConfig};
pub use r#async::{BatchProcessor, SharedLedger};
pub use review_queue::ReviewQueue;
pub use traits::CommandExecutor;
pub use undo_log::UndoLog;
