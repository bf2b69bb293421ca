//! Registry of clients currently inside the club

use std::collections::HashMap;

use crate::club::ClientRecord;
use crate::types::ClientId;

/// Clients inside the club, keyed by name
#[derive(Debug, Clone, Default)]
pub struct ClientRegistry {
    clients: HashMap<ClientId, ClientRecord>,
}

impl ClientRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a client record
    pub fn get(&self, client: &ClientId) -> Option<&ClientRecord> {
        self.clients.get(client)
    }

    /// Get a mutable client record
    pub fn get_mut(&mut self, client: &ClientId) -> Option<&mut ClientRecord> {
        self.clients.get_mut(client)
    }

    /// Register a client; returns `false` if the client was already inside
    pub fn insert(&mut self, client: ClientId, record: ClientRecord) -> bool {
        use std::collections::hash_map::Entry;

        match self.clients.entry(client) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    /// Remove a client from the club
    pub fn remove(&mut self, client: &ClientId) -> Option<ClientRecord> {
        self.clients.remove(client)
    }

    /// Number of clients inside
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether the club is empty
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Number of clients at a table
    pub fn seated_count(&self) -> usize {
        self.clients.values().filter(|r| r.is_seated()).count()
    }

    /// Number of clients in the waiting queue
    pub fn waiting_count(&self) -> usize {
        self.clients.values().filter(|r| r.is_waiting()).count()
    }

    /// Remove every client, returning them sorted by name
    pub fn drain_sorted(&mut self) -> Vec<(ClientId, ClientRecord)> {
        let mut remaining: Vec<_> = self.clients.drain().collect();
        remaining.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        remaining
    }
}
