//! I/O module
//!
//! Handles the command script, report output and the interactive menu.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `shell` - Numbered menu over any line-based reader and writer
//! - `logging` - Outcome logging shared by every front end

pub mod async_reader;
pub mod csv_format;
pub mod logging;
pub mod shell;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{
    convert_csv_record, format_amount, write_accounts_csv, write_review_queue_csv, CsvRecord,
};
pub use logging::log_outcome;
pub use shell::Shell;
pub use sync_reader::SyncReader;
