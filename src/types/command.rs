//! Command types replayed against the account service
//!
//! A command stream is the CLI's stand-in for the request-handling layer: each
//! record names one service operation and carries its arguments.

use super::account::{AccountId, AccountType, ClientId};
use rust_decimal::Decimal;

/// Operations a command record can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    /// Make a client id known to the client directory
    Register,

    /// Open a new account for a client
    Create,

    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    Withdraw,

    /// Re-enable an inactive account
    Activate,

    /// Disable an active account
    Deactivate,

    /// Remove an account with a zero balance
    Delete,
}

/// A single parsed command
///
/// Which fields are populated depends on `command`; the CSV conversion layer
/// guarantees the required ones are present.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRecord {
    pub command: CommandType,

    /// Target account (deposit, withdraw, activate, deactivate, delete)
    pub account: Option<AccountId>,

    /// Client (register, create)
    pub client: Option<ClientId>,

    /// Requested type (create); `None` means the column was empty
    pub account_type: Option<AccountType>,

    /// Amount (create, deposit, withdraw)
    pub amount: Option<Decimal>,
}
