//! Asynchronous CSV reader with batch interface
//!
//! Provides batch reading of ledger commands from a CSV script for the async
//! processing strategy.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - the csv_format module for record conversion
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of LedgerCommands
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerCommand, LedgerError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    line_num: usize,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            line_num: 0,
        }
    }

    /// Read a batch of ledger commands
    ///
    /// Reads up to `batch_size` valid commands. Invalid records are logged
    /// at warn level and skipped; they do not count towards the batch size.
    ///
    /// # Returns
    ///
    /// The converted commands in file order. An empty vector means the end
    /// of the file was reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<LedgerCommand> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            let Some(item) = records.next().await else {
                break;
            };
            self.line_num += 1;
            let line = self.line_num + 1;

            let command = item
                .map_err(LedgerError::from)
                .and_then(|csv_record| {
                    convert_csv_record(csv_record).map_err(|e| e.at_line(line as u64))
                });

            match command {
                Ok(command) => batch.push(command),
                Err(e) => tracing::warn!(line, "Skipping record: {}", e),
            }
        }

        batch
    }
}
