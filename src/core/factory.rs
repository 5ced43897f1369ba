//! Account factories and the type-keyed registry that selects them
//!
//! Each account type has a construction policy. The registry maps a type to its
//! policy once, at startup; adding a type means adding a factory and a registry
//! entry, nothing in the service changes.

use crate::types::{Account, AccountError, AccountType, ClientId};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Construction policy for one account type
pub trait AccountFactory: Send + Sync {
    /// Build a new, unsaved account: active, no id, no account number
    fn create_account(&self, client_id: ClientId, initial_balance: Decimal) -> Account;
}

/// Builds savings accounts
#[derive(Debug, Clone, Copy, Default)]
pub struct SavingsAccountFactory;

impl AccountFactory for SavingsAccountFactory {
    fn create_account(&self, client_id: ClientId, initial_balance: Decimal) -> Account {
        Account::new(client_id, AccountType::Savings, initial_balance)
    }
}

/// Builds checking accounts
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckingAccountFactory;

impl AccountFactory for CheckingAccountFactory {
    fn create_account(&self, client_id: ClientId, initial_balance: Decimal) -> Account {
        Account::new(client_id, AccountType::Checking, initial_balance)
    }
}

/// Maps each account type to its factory
pub struct FactoryRegistry {
    factories: HashMap<AccountType, Box<dyn AccountFactory>>,
}

impl FactoryRegistry {
    /// Create a registry with no factories
    pub fn empty() -> Self {
        FactoryRegistry {
            factories: HashMap::new(),
        }
    }

    /// Register (or replace) the factory for `account_type`
    pub fn register(
        mut self,
        account_type: AccountType,
        factory: impl AccountFactory + 'static,
    ) -> Self {
        self.factories.insert(account_type, Box::new(factory));
        self
    }

    /// Select the factory for `account_type`
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedType` if no factory is registered for the type.
    pub fn factory_for(
        &self,
        account_type: AccountType,
    ) -> Result<&dyn AccountFactory, AccountError> {
        self.factories
            .get(&account_type)
            .map(|factory| factory.as_ref())
            .ok_or_else(|| AccountError::unsupported_type(&account_type.to_string()))
    }
}

impl Default for FactoryRegistry {
    /// Registry with a factory for every account type
    fn default() -> Self {
        FactoryRegistry::empty()
            .register(AccountType::Savings, SavingsAccountFactory)
            .register(AccountType::Checking, CheckingAccountFactory)
    }
}
