//! Synchronous processing strategy
//!
//! Single-threaded replay: `SyncReader` streams records one at a time into the
//! `CommandEngine`, then the account views are written with
//! `csv_format::write_accounts_csv`. Memory use is proportional to the number of
//! accounts, not the number of commands.

use crate::core::CommandEngine;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{apply, write_results, LedgerConfig, ProcessingStrategy};
use crate::types::AccountError;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use account_ledger::strategy::{LedgerConfig, ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(LedgerConfig::default());
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("commands.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyncProcessingStrategy {
    ledger: LedgerConfig,
}

impl SyncProcessingStrategy {
    pub fn new(ledger: LedgerConfig) -> Self {
        Self { ledger }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), AccountError> {
        let engine = CommandEngine::with_clients(self.ledger.clients.iter().copied());

        let reader = SyncReader::new(input_path)?;

        for result in reader {
            match result {
                Ok(record) => apply(&engine, record),
                Err(e) => warn!("Skipping record: {}", e),
            }
        }

        write_results(&engine, &self.ledger, output)
    }
}
