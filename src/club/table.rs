//! Tables, their occupants and their takings
//!
//! Every seating episode is billed on its own when the table is released:
//! the episode length is rounded up to whole hours and multiplied by the
//! hourly rate. Two short sessions on one table therefore cost two hours,
//! not one. Revenue saturates at `u64::MAX`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{billable_hours, ClientId, ClockTime, TableId};

/// A finished seating episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Table the episode took place at
    pub table: TableId,
    /// Minutes the table was held
    pub minutes: u64,
    /// Amount billed for the episode
    pub charge: u64,
}

/// One table of the club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table number
    pub id: TableId,
    /// Client currently at the table
    pub occupant: Option<ClientId>,
    /// Total minutes the table has been occupied
    pub occupied_minutes: u64,
    /// Total amount billed at this table
    pub revenue: u64,
    /// Number of finished seating episodes
    pub sessions: u32,
}

impl Table {
    /// Create an empty table
    pub fn new(id: TableId) -> Self {
        Self { id, occupant: None, occupied_minutes: 0, revenue: 0, sessions: 0 }
    }

    /// Whether nobody sits at the table
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// Put a client at the table
    pub fn occupy(&mut self, client: ClientId) {
        debug_assert!(self.is_free(), "table {} is already occupied", self.id);
        self.occupant = Some(client);
    }

    /// Free the table and bill the episode that started at `since`
    pub fn release(&mut self, since: ClockTime, now: ClockTime, hourly_rate: u64) -> Session {
        let minutes = now.minutes_since(since);
        let charge = billable_hours(minutes).saturating_mul(hourly_rate);

        self.occupant = None;
        self.occupied_minutes += minutes;
        self.revenue = self.revenue.saturating_add(charge);
        self.sessions += 1;

        debug!("Table {} released after {} min, charged {}", self.id, minutes, charge);
        Session { table: self.id, minutes, charge }
    }
}

/// The fixed set of tables in the club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    tables: Vec<Table>,
}

impl Tables {
    /// Create `count` empty tables numbered from 1
    pub fn new(count: usize) -> Self {
        Self { tables: (0..count).map(|i| Table::new(TableId::from_index(i))).collect() }
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the club has no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Get a table by number; `None` if the club has no such table
    pub fn get(&self, id: TableId) -> Option<&Table> {
        self.tables.get(id.index())
    }

    /// Get a mutable table by number
    pub fn get_mut(&mut self, id: TableId) -> Option<&mut Table> {
        self.tables.get_mut(id.index())
    }

    /// Whether `id` names an existing table with nobody at it
    pub fn is_available(&self, id: TableId) -> bool {
        self.get(id).is_some_and(Table::is_free)
    }

    /// Whether any table is free
    pub fn has_free(&self) -> bool {
        self.tables.iter().any(Table::is_free)
    }

    /// Number of occupied tables
    pub fn occupied_count(&self) -> usize {
        self.tables.iter().filter(|t| !t.is_free()).count()
    }

    /// Iterate over the tables in number order
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> ClockTime {
        ClockTime::from_hm(h, m).unwrap()
    }

    fn table_id(n: usize) -> TableId {
        TableId::new(n).unwrap()
    }

    #[test]
    fn test_release_bills_started_hours() {
        let mut table = Table::new(table_id(1));
        table.occupy(ClientId::new("a").unwrap());

        let session = table.release(hm(8, 5), hm(8, 50), 10);
        assert_eq!(session.minutes, 45);
        assert_eq!(session.charge, 10);
        assert!(table.is_free());

        table.occupy(ClientId::new("b").unwrap());
        let session = table.release(hm(9, 0), hm(11, 1), 10);
        assert_eq!(session.minutes, 121);
        assert_eq!(session.charge, 30);

        assert_eq!(table.occupied_minutes, 166);
        assert_eq!(table.revenue, 40);
        assert_eq!(table.sessions, 2);
    }

    #[test]
    fn test_episodes_are_billed_separately() {
        let mut table = Table::new(table_id(1));
        table.occupy(ClientId::new("a").unwrap());
        table.release(hm(9, 0), hm(9, 30), 10);
        table.occupy(ClientId::new("b").unwrap());
        table.release(hm(10, 0), hm(10, 30), 10);

        assert_eq!(table.occupied_minutes, 60);
        assert_eq!(table.revenue, 20);
    }

    #[test]
    fn test_zero_length_episode_is_free() {
        let mut table = Table::new(table_id(1));
        table.occupy(ClientId::new("a").unwrap());
        let session = table.release(hm(9, 0), hm(9, 0), 10);
        assert_eq!(session.charge, 0);
        assert_eq!(table.sessions, 1);
    }

    #[test]
    fn test_huge_rate_saturates_revenue() {
        let mut table = Table::new(table_id(1));
        table.occupy(ClientId::new("a").unwrap());
        let session = table.release(hm(9, 0), hm(11, 0), u64::MAX);
        assert_eq!(session.charge, u64::MAX);

        table.occupy(ClientId::new("b").unwrap());
        table.release(hm(11, 0), hm(11, 10), u64::MAX);
        assert_eq!(table.revenue, u64::MAX);
        assert_eq!(table.sessions, 2);
    }

    #[test]
    fn test_tables_lookup() {
        let mut tables = Tables::new(2);
        assert_eq!(tables.len(), 2);
        assert!(tables.get(table_id(3)).is_none());
        assert!(!tables.is_available(table_id(3)));
        assert!(tables.is_available(table_id(2)));

        tables.get_mut(table_id(1)).unwrap().occupy(ClientId::new("a").unwrap());
        tables.get_mut(table_id(2)).unwrap().occupy(ClientId::new("b").unwrap());
        assert!(!tables.has_free());
        assert_eq!(tables.occupied_count(), 2);

        let ids: Vec<usize> = tables.iter().map(|t| t.id.number()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
