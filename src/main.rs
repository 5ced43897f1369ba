//! Account Ledger CLI
//!
//! Command-line interface for replaying account commands from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- commands.csv > accounts.csv
//! cargo run -- --clients 1,2,3 commands.csv > accounts.csv
//! cargo run -- --strategy async --batch-size 500 commands.csv > accounts.csv
//! cargo run -- --client 2 commands.csv > client_2_accounts.csv
//! ```
//!
//! The program reads command records from the input CSV file, applies them to
//! the account service, and prints the final account views to stdout. Rejected
//! commands are logged to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, client without accounts, etc.)

use account_ledger::cli;
use account_ledger::strategy;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let strategy = {
        let batch = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), args.to_ledger_config(), batch)
    };

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        error!("{}", e);
        process::exit(1);
    }
}
