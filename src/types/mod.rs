//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the Account entity, account types and the read view
//! - `request`: the account creation request
//! - `command`: command records replayed by the CLI
//! - `error`: Error types for the account ledger

pub mod account;
pub mod command;
pub mod error;
pub mod request;

pub use account::{Account, AccountId, AccountType, AccountView, ClientId};
pub use command::{CommandRecord, CommandType};
pub use error::AccountError;
pub use request::CreateAccountRequest;
