//! In-memory account storage
//!
//! This module provides `InMemoryAccountRepository`, a thread-safe account store
//! backed by `DashMap`. Ids come from an atomic sequence starting at 1, so the
//! first saved account gets id 1, the next id 2, and so on. Saving an account
//! that already carries an id moves the sequence past it.
//!
//! # Thread Safety
//!
//! Each call is atomic on its own through DashMap's internal sharding. Nothing
//! spans two calls: a read followed by a save is not isolated from concurrent
//! writers, which is the contract the account service expects.

use crate::core::traits::AccountRepository;
use crate::types::{Account, AccountId, ClientId};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe in-memory account store
#[derive(Debug)]
pub struct InMemoryAccountRepository {
    accounts: DashMap<AccountId, Account>,
    next_id: AtomicU64,
}

impl InMemoryAccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn sorted(mut accounts: Vec<Account>) -> Vec<Account> {
        accounts.sort_by_key(|account| account.id());
        accounts
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn save(&self, mut account: Account) -> Account {
        let id = match account.id() {
            Some(id) => {
                self.next_id.fetch_max(id + 1, Ordering::Relaxed);
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                account.set_id(id);
                id
            }
        };

        self.accounts.insert(id, account.clone());
        account
    }

    fn find_by_id(&self, id: AccountId) -> Option<Account> {
        self.accounts.get(&id).map(|entry| entry.value().clone())
    }

    fn find_all(&self) -> Vec<Account> {
        Self::sorted(
            self.accounts
                .iter()
                .map(|entry| entry.value().clone())
                .collect(),
        )
    }

    fn find_by_client_id(&self, client_id: ClientId) -> Vec<Account> {
        Self::sorted(
            self.accounts
                .iter()
                .filter(|entry| entry.value().client_id() == client_id)
                .map(|entry| entry.value().clone())
                .collect(),
        )
    }

    fn delete(&self, account: &Account) {
        if let Some(id) = account.id() {
            self.accounts.remove(&id);
        }
    }
}
