//! Asynchronous CSV reader with batch interface
//!
//! Provides a streaming interface over command records from a CSV source.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - futures' `AsyncRead` so any async source (a tokio file behind a compat
//!   layer, an in-memory cursor) can feed it
//! - Batch reading so the caller decides how many records to hold at once
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of CommandRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::CommandRecord;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Asynchronous CSV reader over command records
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader over an async byte source
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader }
    }

    /// Read up to `batch_size` command records
    ///
    /// Rows that fail to parse or convert are logged and skipped, so a batch may
    /// be shorter than `batch_size` even mid-file. An empty batch means the end
    /// of the input was reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<CommandRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => match convert_csv_record(csv_record) {
                    Ok(command_record) => batch.push(command_record),
                    Err(e) => warn!("Record conversion error: {}", e),
                },
                Some(Err(e)) => warn!("CSV parse error: {}", e),
                None => break,
            }
        }

        batch
    }
}
