//! Command replay engine
//!
//! This module provides the `CommandEngine`, which routes parsed command records
//! to the `AccountService` running over in-memory collaborators. It is the
//! CLI's request-handling layer: it checks that each command carries the
//! arguments it needs and turns them into service calls.

use crate::core::client_directory::InMemoryClientDirectory;
use crate::core::number_generator::SequentialAccountNumberGenerator;
use crate::core::repository::InMemoryAccountRepository;
use crate::core::service::AccountService;
use crate::types::{
    AccountError, AccountId, AccountView, ClientId, CommandRecord, CommandType,
    CreateAccountRequest,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// Account service wired to the in-memory collaborators
pub type InMemoryAccountService = AccountService<
    InMemoryAccountRepository,
    Arc<InMemoryClientDirectory>,
    SequentialAccountNumberGenerator,
>;

/// Applies command records to an in-memory account service
pub struct CommandEngine {
    service: InMemoryAccountService,
    clients: Arc<InMemoryClientDirectory>,
}

impl CommandEngine {
    /// Create an engine with no clients and no accounts
    pub fn new() -> Self {
        Self::with_clients(std::iter::empty())
    }

    /// Create an engine with `clients` already registered
    pub fn with_clients(clients: impl IntoIterator<Item = ClientId>) -> Self {
        let clients: Arc<InMemoryClientDirectory> = Arc::new(clients.into_iter().collect());

        CommandEngine {
            service: AccountService::new(
                InMemoryAccountRepository::new(),
                Arc::clone(&clients),
                SequentialAccountNumberGenerator::new(),
            ),
            clients,
        }
    }

    /// The underlying account service
    pub fn service(&self) -> &InMemoryAccountService {
        &self.service
    }

    /// Apply a single command
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if a required argument is missing, or whatever
    /// error the service reports for the operation. On error nothing is stored.
    pub fn process(&self, record: CommandRecord) -> Result<(), AccountError> {
        match record.command {
            CommandType::Register => {
                let client = required(record.client, "client", record.command)?;
                if !self.clients.register(client) {
                    debug!(client, "client already registered");
                }
                Ok(())
            }
            CommandType::Create => {
                let request = CreateAccountRequest {
                    client_id: required(record.client, "client", record.command)?,
                    account_type: record.account_type,
                    initial_balance: required(record.amount, "amount", record.command)?,
                };
                self.service.create_account(request).map(drop)
            }
            CommandType::Deposit => {
                let (id, amount) = account_and_amount(&record)?;
                self.service.deposit(id, amount).map(drop)
            }
            CommandType::Withdraw => {
                let (id, amount) = account_and_amount(&record)?;
                self.service.withdraw(id, amount).map(drop)
            }
            CommandType::Activate => {
                let id = required(record.account, "account", record.command)?;
                self.service.activate(id).map(drop)
            }
            CommandType::Deactivate => {
                let id = required(record.account, "account", record.command)?;
                self.service.deactivate(id).map(drop)
            }
            CommandType::Delete => {
                let id = required(record.account, "account", record.command)?;
                self.service.delete(id)
            }
        }
    }

    /// Read views of every account
    pub fn get_accounts(&self) -> Vec<AccountView> {
        self.service.list_all()
    }

    /// Read views of one client's accounts
    ///
    /// # Errors
    ///
    /// Returns `ClientHasNoAccounts` if the client owns no accounts.
    pub fn get_client_accounts(&self, client: ClientId) -> Result<Vec<AccountView>, AccountError> {
        self.service.list_by_client(client)
    }
}

impl Default for CommandEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwrap an argument the command needs, reporting which one is missing
fn required<T>(value: Option<T>, field: &str, command: CommandType) -> Result<T, AccountError> {
    value.ok_or_else(|| {
        AccountError::validation(&format!("{:?} command requires {}", command, field))
    })
}

fn account_and_amount(record: &CommandRecord) -> Result<(AccountId, Decimal), AccountError> {
    Ok((
        required(record.account, "account", record.command)?,
        required(record.amount, "amount", record.command)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountType;
    use rstest::rstest;

    fn record(
        command: CommandType,
        account: Option<AccountId>,
        client: Option<ClientId>,
        account_type: Option<AccountType>,
        amount: Option<i64>,
    ) -> CommandRecord {
        CommandRecord {
            command,
            account,
            client,
            account_type,
            amount: amount.map(|a| Decimal::new(a, 0)),
        }
    }

    fn create(client: ClientId, account_type: AccountType, amount: i64) -> CommandRecord {
        record(CommandType::Create, None, Some(client), Some(account_type), Some(amount))
    }

    #[test]
    fn test_register_then_create() {
        let engine = CommandEngine::new();

        let before = engine.process(create(1, AccountType::Savings, 10));
        assert_eq!(before, Err(AccountError::client_not_found(1)));

        engine
            .process(record(CommandType::Register, None, Some(1), None, None))
            .unwrap();
        engine.process(create(1, AccountType::Savings, 10)).unwrap();

        let accounts = engine.get_accounts();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].account_number, "SVG-000001");
    }

    #[test]
    fn test_register_twice_is_harmless() {
        let engine = CommandEngine::new();
        let register = record(CommandType::Register, None, Some(4), None, None);

        assert!(engine.process(register.clone()).is_ok());
        assert!(engine.process(register).is_ok());
    }

    #[test]
    fn test_full_lifecycle() {
        let engine = CommandEngine::with_clients([1]);

        engine.process(create(1, AccountType::Checking, 100)).unwrap();
        engine
            .process(record(CommandType::Withdraw, Some(1), None, None, Some(60)))
            .unwrap();
        engine
            .process(record(CommandType::Deactivate, Some(1), None, None, None))
            .unwrap();
        engine
            .process(record(CommandType::Activate, Some(1), None, None, None))
            .unwrap();
        engine
            .process(record(CommandType::Deposit, Some(1), None, None, Some(10)))
            .unwrap();
        engine
            .process(record(CommandType::Withdraw, Some(1), None, None, Some(50)))
            .unwrap();
        engine
            .process(record(CommandType::Delete, Some(1), None, None, None))
            .unwrap();

        assert!(engine.get_accounts().is_empty());
    }

    #[rstest]
    #[case::register_without_client(
        record(CommandType::Register, None, None, None, None),
        "requires client"
    )]
    #[case::create_without_client(
        record(CommandType::Create, None, None, Some(AccountType::Savings), Some(1)),
        "requires client"
    )]
    #[case::create_without_amount(
        record(CommandType::Create, None, Some(1), Some(AccountType::Savings), None),
        "requires amount"
    )]
    #[case::deposit_without_account(
        record(CommandType::Deposit, None, None, None, Some(1)),
        "requires account"
    )]
    #[case::withdraw_without_amount(
        record(CommandType::Withdraw, Some(1), None, None, None),
        "requires amount"
    )]
    #[case::delete_without_account(
        record(CommandType::Delete, None, None, None, None),
        "requires account"
    )]
    fn test_missing_arguments(#[case] record: CommandRecord, #[case] expected: &str) {
        let engine = CommandEngine::with_clients([1]);

        let err = engine.process(record).unwrap_err();

        assert!(matches!(err, AccountError::Validation { .. }));
        assert!(err.to_string().contains(expected));
    }

    #[test]
    fn test_create_without_type_fails_validation() {
        let engine = CommandEngine::with_clients([1]);

        let err = engine
            .process(record(CommandType::Create, None, Some(1), None, Some(10)))
            .unwrap_err();

        assert_eq!(err, AccountError::validation("account type is required"));
    }

    #[test]
    fn test_get_client_accounts() {
        let engine = CommandEngine::with_clients([1, 2]);
        engine.process(create(1, AccountType::Savings, 10)).unwrap();
        engine.process(create(2, AccountType::Checking, 10)).unwrap();

        let accounts = engine.get_client_accounts(2).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].client_id, 2);

        assert!(engine.get_client_accounts(3).unwrap_err().is_not_found());
    }
}
