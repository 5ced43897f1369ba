//! Processing strategy module for command replay
//!
//! This module defines the Strategy pattern for complete replay pipelines, from
//! CSV parsing through the command engine to the account view output. Different
//! implementations (synchronous iterator, asynchronous batch reads) can be
//! selected at runtime and produce identical output for the same input.

use crate::cli::StrategyType;
use crate::core::CommandEngine;
use crate::io::csv_format::write_accounts_csv;
use crate::types::{AccountError, ClientId, CommandRecord};
use std::io::Write;
use std::path::Path;
use tracing::warn;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Ledger setup shared by every strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerConfig {
    /// Client ids known before the first command runs
    pub clients: Vec<ClientId>,

    /// Only report this client's accounts
    pub client_filter: Option<ClientId>,
}

/// Processing strategy trait for complete replay pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Replay the commands in `input_path` and write the resulting account views
    ///
    /// Individual command failures are logged and processing continues with the
    /// next record; they never make this method fail.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - Output cannot be written
    /// - A client filter is set and that client owns no accounts
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), AccountError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `batch` is only used by the async strategy; `None` means defaults.
pub fn create_strategy(
    strategy_type: StrategyType,
    ledger: LedgerConfig,
    batch: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(ledger)),
        StrategyType::Async => Box::new(AsyncProcessingStrategy::new(
            ledger,
            batch.unwrap_or_default(),
        )),
    }
}

/// Apply one record, logging (not propagating) domain failures
fn apply(engine: &CommandEngine, record: CommandRecord) {
    let command = record.command;
    if let Err(e) = engine.process(record) {
        warn!(?command, "Command rejected: {}", e);
    }
}

/// Write the account views selected by `ledger` once replay has finished
fn write_results(
    engine: &CommandEngine,
    ledger: &LedgerConfig,
    output: &mut dyn Write,
) -> Result<(), AccountError> {
    let accounts = match ledger.client_filter {
        Some(client) => engine.get_client_accounts(client)?,
        None => engine.get_accounts(),
    };

    write_accounts_csv(&accounts, output).map_err(|message| AccountError::IoError { message })
}
