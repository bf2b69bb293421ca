//! Client state tracking
//!
//! This module contains the per-client record kept while a client is inside
//! the club.

use serde::{Deserialize, Serialize};

use crate::types::{ClockTime, TableId};

/// Where a client currently is inside the club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClientStatus {
    /// Inside, neither seated nor queued
    #[default]
    Idle,
    /// In the waiting queue
    Waiting,
    /// At a table since the given time
    Seated {
        /// Table the client occupies
        table: TableId,
        /// When the client sat down
        since: ClockTime,
    },
}

/// Current state of a client inside the club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientRecord {
    /// Where the client is
    pub status: ClientStatus,
    /// When the client arrived
    pub arrived_at: ClockTime,
}

impl ClientRecord {
    /// Create a record for a client who just arrived
    pub fn new(arrived_at: ClockTime) -> Self {
        Self { status: ClientStatus::Idle, arrived_at }
    }

    /// Whether the client is at a table
    pub fn is_seated(&self) -> bool {
        matches!(self.status, ClientStatus::Seated { .. })
    }

    /// Whether the client is in the waiting queue
    pub fn is_waiting(&self) -> bool {
        self.status == ClientStatus::Waiting
    }

    /// Table the client occupies, if seated
    pub fn table(&self) -> Option<TableId> {
        match self.status {
            ClientStatus::Seated { table, .. } => Some(table),
            _ => None,
        }
    }

    /// Seat the client at `table` from `since`
    pub fn seat(&mut self, table: TableId, since: ClockTime) {
        self.status = ClientStatus::Seated { table, since };
    }

    /// Put the client in the waiting queue
    pub fn start_waiting(&mut self) {
        self.status = ClientStatus::Waiting;
    }

    /// Take the client off its table, returning the table and seating time
    pub fn stand_up(&mut self) -> Option<(TableId, ClockTime)> {
        match self.status {
            ClientStatus::Seated { table, since } => {
                self.status = ClientStatus::Idle;
                Some((table, since))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_is_idle() {
        let record = ClientRecord::new(ClockTime::from_hm(9, 0).unwrap());
        assert_eq!(record.status, ClientStatus::Idle);
        assert!(!record.is_seated());
        assert!(!record.is_waiting());
        assert_eq!(record.table(), None);
    }

    #[test]
    fn test_seating_clears_waiting() {
        let mut record = ClientRecord::new(ClockTime::from_hm(9, 0).unwrap());
        record.start_waiting();
        assert!(record.is_waiting());

        let table = TableId::new(1).unwrap();
        record.seat(table, ClockTime::from_hm(9, 30).unwrap());
        assert!(record.is_seated());
        assert!(!record.is_waiting());
        assert_eq!(record.table(), Some(table));
    }

    #[test]
    fn test_stand_up() {
        let mut record = ClientRecord::new(ClockTime::from_hm(9, 0).unwrap());
        assert_eq!(record.stand_up(), None);

        let table = TableId::new(2).unwrap();
        let since = ClockTime::from_hm(9, 15).unwrap();
        record.seat(table, since);
        assert_eq!(record.stand_up(), Some((table, since)));
        assert_eq!(record.status, ClientStatus::Idle);
    }
}
