//! Collaborator traits for the account service
//!
//! The service depends on three external collaborators: storage, a client
//! directory, and an account-number generator. Each is a trait so the CLI can
//! run against in-memory implementations while tests substitute fakes.
//!
//! All methods take `&self`; implementations that keep state use interior
//! mutability and must make a single call atomic on their own.

use crate::types::{Account, AccountId, AccountType, ClientId};
use std::sync::Arc;

/// Storage for accounts
pub trait AccountRepository {
    /// Persist an account, assigning an id if it has none, and return the stored copy
    fn save(&self, account: Account) -> Account;

    /// Find an account by id
    fn find_by_id(&self, id: AccountId) -> Option<Account>;

    /// Get every stored account
    fn find_all(&self) -> Vec<Account>;

    /// Get every account owned by a client
    fn find_by_client_id(&self, client_id: ClientId) -> Vec<Account>;

    /// Remove an account
    fn delete(&self, account: &Account);
}

/// Answers whether a client id is known
pub trait ClientDirectory {
    fn exists(&self, client_id: ClientId) -> bool;
}

/// Produces account numbers
///
/// Implementations must never return the same number twice for the lifetime
/// of the system.
pub trait AccountNumberGenerator {
    fn generate(&self, account_type: AccountType) -> String;
}

impl<T: AccountRepository + ?Sized> AccountRepository for Arc<T> {
    fn save(&self, account: Account) -> Account {
        (**self).save(account)
    }

    fn find_by_id(&self, id: AccountId) -> Option<Account> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Account> {
        (**self).find_all()
    }

    fn find_by_client_id(&self, client_id: ClientId) -> Vec<Account> {
        (**self).find_by_client_id(client_id)
    }

    fn delete(&self, account: &Account) {
        (**self).delete(account)
    }
}

impl<T: ClientDirectory + ?Sized> ClientDirectory for Arc<T> {
    fn exists(&self, client_id: ClientId) -> bool {
        (**self).exists(client_id)
    }
}

impl<T: AccountNumberGenerator + ?Sized> AccountNumberGenerator for Arc<T> {
    fn generate(&self, account_type: AccountType) -> String {
        (**self).generate(account_type)
    }
}
