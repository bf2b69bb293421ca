//! Bounded FIFO queue of clients waiting for a table

use std::collections::VecDeque;

use crate::types::ClientId;

/// Clients waiting for a table, in arrival order
///
/// The queue never holds more clients than its capacity; a push onto a full
/// queue hands the client back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingQueue {
    clients: VecDeque<ClientId>,
    capacity: usize,
}

impl WaitingQueue {
    /// Create an empty queue holding at most `capacity` clients
    pub fn new(capacity: usize) -> Self {
        Self { clients: VecDeque::with_capacity(capacity), capacity }
    }

    /// Add a client at the back, or give it back if the queue is full
    pub fn push(&mut self, client: ClientId) -> Result<(), ClientId> {
        if self.is_full() {
            return Err(client);
        }
        self.clients.push_back(client);
        Ok(())
    }

    /// Take the client at the front
    pub fn pop(&mut self) -> Option<ClientId> {
        self.clients.pop_front()
    }

    /// Remove a client from anywhere in the queue
    pub fn remove(&mut self, client: &ClientId) -> bool {
        match self.clients.iter().position(|c| c == client) {
            Some(position) => {
                self.clients.remove(position);
                true
            }
            None => false,
        }
    }

    /// Number of queued clients
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether nobody is waiting
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Whether another client would exceed the capacity
    pub fn is_full(&self) -> bool {
        self.clients.len() >= self.capacity
    }

    /// Maximum number of queued clients
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over the queue front to back
    pub fn iter(&self) -> impl Iterator<Item = &ClientId> {
        self.clients.iter()
    }
}
