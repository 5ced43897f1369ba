use crate::strategy::{BatchConfig, LedgerConfig};
use crate::types::ClientId;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Replay account commands and print the resulting accounts
#[derive(Parser, Debug)]
#[command(name = "account-ledger")]
#[command(about = "Replay account commands and print the resulting accounts", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing command records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Parsing strategy to use for processing commands
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Parsing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of records per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records read per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Client ids known before the first command
    #[arg(
        long = "clients",
        value_name = "IDS",
        value_delimiter = ',',
        help = "Comma-separated client ids to register up front"
    )]
    pub clients: Vec<ClientId>,

    /// Only print this client's accounts
    #[arg(
        long = "client",
        value_name = "ID",
        help = "Print only the accounts of this client"
    )]
    pub client: Option<ClientId>,

    /// Log filter directive
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        env = "ACCOUNT_LEDGER_LOG",
        default_value = "warn",
        help = "Log filter, e.g. 'warn' or 'account_ledger=debug'"
    )]
    pub log_level: String,
}

/// Available parsing strategies for CSV processing
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments, or the defaults
    pub fn to_batch_config(&self) -> BatchConfig {
        match self.batch_size {
            Some(batch_size) => BatchConfig::new(batch_size),
            None => BatchConfig::default(),
        }
    }

    /// Create the LedgerConfig from CLI arguments
    pub fn to_ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            clients: self.clients.clone(),
            client_filter: self.client,
        }
    }
}
