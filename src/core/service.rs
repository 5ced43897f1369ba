//! Account service
//!
//! `AccountService` orchestrates every account operation. It validates creation
//! requests, checks client existence, selects the factory for the requested
//! type, assigns the generated account number, and persists the result. Lifecycle
//! and balance operations load the account, apply the entity's guarded
//! transition, and save it.
//!
//! Each public method is one unit of work: it either returns a read view or an
//! error, and on error nothing has been written to the repository.
//!
//! # Concurrency
//!
//! Operations read, then write, with no version check in between. Two concurrent
//! creations for a new client may both pass the existence check, and two
//! concurrent transitions on one account race at the repository. Stronger
//! guarantees belong to the repository implementation.

use crate::core::factory::FactoryRegistry;
use crate::core::traits::{AccountNumberGenerator, AccountRepository, ClientDirectory};
use crate::core::validation::AccountValidator;
use crate::types::{
    Account, AccountError, AccountId, AccountView, ClientId, CreateAccountRequest,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Orchestrates account operations over the storage, client and number collaborators
pub struct AccountService<R, C, G> {
    repository: R,
    clients: C,
    numbers: G,
    factories: FactoryRegistry,
    validator: AccountValidator,
}

impl<R, C, G> AccountService<R, C, G>
where
    R: AccountRepository,
    C: ClientDirectory,
    G: AccountNumberGenerator,
{
    /// Create a service with the default factory registry and validation rules
    pub fn new(repository: R, clients: C, numbers: G) -> Self {
        Self::with_policies(
            repository,
            clients,
            numbers,
            FactoryRegistry::default(),
            AccountValidator::default(),
        )
    }

    /// Create a service with a custom factory registry and validator
    pub fn with_policies(
        repository: R,
        clients: C,
        numbers: G,
        factories: FactoryRegistry,
        validator: AccountValidator,
    ) -> Self {
        AccountService {
            repository,
            clients,
            numbers,
            factories,
            validator,
        }
    }

    /// Open a new account
    ///
    /// # Errors
    ///
    /// - `Validation` if the request breaks a business rule
    /// - `ClientNotFound` if the client directory does not know the client
    /// - `UnsupportedType` if no factory is registered for the type
    pub fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<AccountView, AccountError> {
        self.validator.validate(&request)?;

        if !self.clients.exists(request.client_id) {
            return Err(AccountError::client_not_found(request.client_id));
        }

        let account_type = request
            .account_type
            .ok_or_else(|| AccountError::validation("account type is required"))?;

        let mut account = self
            .factories
            .factory_for(account_type)?
            .create_account(request.client_id, request.initial_balance);

        account.assign_account_number(self.numbers.generate(account_type))?;

        let saved = self.repository.save(account);
        debug!(
            id = ?saved.id(),
            number = ?saved.account_number(),
            client = saved.client_id(),
            "account created"
        );

        Ok(saved.into())
    }

    /// Get one account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this id.
    pub fn get(&self, id: AccountId) -> Result<AccountView, AccountError> {
        self.load(id).map(AccountView::from)
    }

    /// Every stored account, in repository order
    pub fn list_all(&self) -> Vec<AccountView> {
        self.repository
            .find_all()
            .into_iter()
            .map(AccountView::from)
            .collect()
    }

    /// Every account owned by a client
    ///
    /// # Errors
    ///
    /// Returns `ClientHasNoAccounts` if the client owns no accounts.
    pub fn list_by_client(&self, client_id: ClientId) -> Result<Vec<AccountView>, AccountError> {
        let accounts = self.repository.find_by_client_id(client_id);
        if accounts.is_empty() {
            return Err(AccountError::client_has_no_accounts(client_id));
        }

        Ok(accounts.into_iter().map(AccountView::from).collect())
    }

    /// Delete an account whose balance is exactly zero
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no account has this id
    /// - `InvalidOperation` if the balance is not zero; the account stays stored
    pub fn delete(&self, id: AccountId) -> Result<(), AccountError> {
        let account = self.load(id)?;

        if !account.has_zero_balance() {
            return Err(AccountError::invalid_operation("account balance must be zero"));
        }

        self.repository.delete(&account);
        debug!(id, "account deleted");
        Ok(())
    }

    /// Re-enable an inactive account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no account has this id
    /// - `InvalidOperation` if the account is already active
    pub fn activate(&self, id: AccountId) -> Result<AccountView, AccountError> {
        self.update(id, "activated", Account::activate)
    }

    /// Disable an active account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no account has this id
    /// - `InvalidOperation` if the account is already inactive
    pub fn deactivate(&self, id: AccountId) -> Result<AccountView, AccountError> {
        self.update(id, "deactivated", Account::deactivate)
    }

    /// Credit funds to an account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no account has this id
    /// - `InvalidOperation` if the amount is not positive
    /// - `ArithmeticOverflow` if the balance would overflow
    pub fn deposit(&self, id: AccountId, amount: Decimal) -> Result<AccountView, AccountError> {
        self.update(id, "deposit applied", |account| account.deposit(amount))
    }

    /// Debit funds from an account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no account has this id
    /// - `InvalidOperation` if the amount is not positive, or a savings account
    ///   would go negative
    /// - `ArithmeticOverflow` if the balance would overflow
    pub fn withdraw(&self, id: AccountId, amount: Decimal) -> Result<AccountView, AccountError> {
        self.update(id, "withdrawal applied", |account| account.withdraw(amount))
    }

    fn load(&self, id: AccountId) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .ok_or_else(|| AccountError::account_not_found(id))
    }

    /// Load, mutate a private copy, and save only if the mutation succeeded
    fn update<F>(&self, id: AccountId, event: &str, f: F) -> Result<AccountView, AccountError>
    where
        F: FnOnce(&mut Account) -> Result<(), AccountError>,
    {
        let mut account = self.load(id)?;
        f(&mut account)?;

        let saved = self.repository.save(account);
        debug!(id, balance = %saved.balance(), active = saved.is_active(), "{}", event);
        Ok(saved.into())
    }
}
