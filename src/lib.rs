//! Account Ledger Library
//! # Overview
//!
//! This library manages bank accounts: creation, lookup, listing, balance
//! operations, and the active/inactive lifecycle, enforcing per-type rules such as
//! "a savings account never goes negative". A CSV command replay front end
//! exercises it from the command line.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, AccountView, CreateAccountRequest, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::service`] - Account operation orchestration
//!   - [`core::factory`] - Per-type account construction
//!   - [`core::validation`] - Business rules for creation requests
//!   - [`core::traits`] - Storage, client directory and number generator contracts
//!   - [`core::engine`] - Command replay over in-memory collaborators
//! - [`io`] - CSV reading and writing
//! - [`strategy`] - Sync and async replay pipelines
//!
//! # Account Rules
//!
//! - A new account is active and carries a generated, type-prefixed number
//! - Savings accounts reject withdrawals that would leave a negative balance
//! - Activating an active account, or deactivating an inactive one, is rejected
//! - Only accounts with a zero balance can be deleted

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use self::core::{AccountService, CommandEngine};
pub use io::write_accounts_csv;
pub use types::{
    Account, AccountError, AccountId, AccountType, AccountView, ClientId, CommandRecord,
    CommandType, CreateAccountRequest,
};
