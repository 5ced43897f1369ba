//! In-memory client directory
//!
//! Clients are owned by another system; the ledger only needs to know which
//! client ids exist. `InMemoryClientDirectory` keeps that set in a `DashSet`.

use crate::core::traits::ClientDirectory;
use crate::types::ClientId;
use dashmap::DashSet;

/// Thread-safe set of known client ids
#[derive(Debug, Default)]
pub struct InMemoryClientDirectory {
    clients: DashSet<ClientId>,
}

impl InMemoryClientDirectory {
    pub fn new() -> Self {
        Self {
            clients: DashSet::new(),
        }
    }

    /// Make a client id known. Returns `false` if it was already registered.
    pub fn register(&self, client_id: ClientId) -> bool {
        self.clients.insert(client_id)
    }
}

impl FromIterator<ClientId> for InMemoryClientDirectory {
    fn from_iter<I: IntoIterator<Item = ClientId>>(iter: I) -> Self {
        let directory = InMemoryClientDirectory::new();
        for client_id in iter {
            directory.register(client_id);
        }
        directory
    }
}

impl ClientDirectory for InMemoryClientDirectory {
    fn exists(&self, client_id: ClientId) -> bool {
        self.clients.contains(&client_id)
    }
}
