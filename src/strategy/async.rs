//! Asynchronous processing strategy
//!
//! Reads the command file through tokio's async file I/O and csv-async, in
//! batches of configurable size. Commands are applied strictly in file order:
//! a batch is fully applied before the next one is read, because later
//! commands refer to account ids handed out by earlier ones.

use crate::core::CommandEngine;
use crate::io::async_reader::AsyncReader;
use crate::strategy::{apply, write_results, LedgerConfig, ProcessingStrategy};
use crate::types::AccountError;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tokio_util::compat::TokioAsyncReadCompatExt;
use tracing::{debug, warn};

/// Configuration for batched reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of records read per batch
    pub batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { batch_size: 1000 }
    }
}

impl BatchConfig {
    /// Create a BatchConfig, falling back to the default for a zero batch size
    pub fn new(batch_size: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        Self { batch_size }
    }
}

/// Asynchronous batch-reading strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    ledger: LedgerConfig,
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(ledger: LedgerConfig, config: BatchConfig) -> Self {
        Self { ledger, config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), AccountError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AccountError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(async {
            let engine = CommandEngine::with_clients(self.ledger.clients.iter().copied());

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| match e.kind() {
                    ErrorKind::NotFound => AccountError::FileNotFound {
                        path: input_path.display().to_string(),
                    },
                    _ => AccountError::IoError {
                        message: format!("Failed to open file '{}': {}", input_path.display(), e),
                    },
                })?;

            let mut reader = AsyncReader::new(file.compat());

            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                debug!(records = batch.len(), "applying batch");
                for record in batch {
                    apply(&engine, record);
                }
            }

            write_results(&engine, &self.ledger, output)
        })
    }
}
