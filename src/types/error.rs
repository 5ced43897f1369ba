//! Error types for the account ledger
//!
//! This module defines every error the account core and its CSV boundary can produce.
//!
//! # Error Categories
//!
//! - **Caller errors**: validation failures, unknown clients or accounts, and
//!   violated state-transition preconditions. These are reported, never retried.
//! - **Internal faults**: a type with no registered factory, arithmetic overflow.
//! - **Boundary errors**: file not found, I/O and CSV parse failures.

use super::account::{AccountId, ClientId};
use thiserror::Error;

/// Main error type for the account ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// A creation request broke a business rule
    #[error("Validation failed: {reason}")]
    Validation {
        /// Human-readable description of the broken rule
        reason: String,
    },

    /// The referenced client is not known to the client directory
    #[error("client not found: {client}")]
    ClientNotFound { client: ClientId },

    /// No account is stored under the requested id
    #[error("account not found: {id}")]
    AccountNotFound { id: AccountId },

    /// The client exists (or not) but owns no accounts
    #[error("client has no accounts: {client}")]
    ClientHasNoAccounts { client: ClientId },

    /// A state-transition precondition was violated
    ///
    /// The entity and the stored state are left unchanged.
    #[error("Invalid operation: {reason}")]
    InvalidOperation {
        /// The precondition that was violated
        reason: String,
    },

    /// No factory is registered for the account type
    ///
    /// Indicates a mismatch between the factory registry and validation.
    #[error("Unsupported account type '{account_type}'")]
    UnsupportedType { account_type: String },

    /// Arithmetic overflow in a balance calculation
    #[error("Arithmetic overflow in {operation}{}", account.map(|a| format!(" for account {}", a)).unwrap_or_default())]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account id, if the account has been persisted
        account: Option<AccountId>,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// I/O error while reading input or writing output
    #[error("I/O error: {message}")]
    IoError { message: String },

    /// CSV parsing error
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for AccountError {
    fn from(error: std::io::Error) -> Self {
        AccountError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AccountError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        AccountError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl AccountError {
    /// Create a Validation error
    pub fn validation(reason: &str) -> Self {
        AccountError::Validation {
            reason: reason.to_string(),
        }
    }

    /// Create a ClientNotFound error
    pub fn client_not_found(client: ClientId) -> Self {
        AccountError::ClientNotFound { client }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(id: AccountId) -> Self {
        AccountError::AccountNotFound { id }
    }

    /// Create a ClientHasNoAccounts error
    pub fn client_has_no_accounts(client: ClientId) -> Self {
        AccountError::ClientHasNoAccounts { client }
    }

    /// Create an InvalidOperation error
    pub fn invalid_operation(reason: &str) -> Self {
        AccountError::InvalidOperation {
            reason: reason.to_string(),
        }
    }

    /// Create an UnsupportedType error
    pub fn unsupported_type(account_type: &str) -> Self {
        AccountError::UnsupportedType {
            account_type: account_type.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: Option<AccountId>) -> Self {
        AccountError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Whether this error reports a missing account or account set
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AccountError::AccountNotFound { .. } | AccountError::ClientHasNoAccounts { .. }
        )
    }
}
