//! Club state: clients, tables and the waiting queue
//!
//! This module contains the state the simulation engine owns while replaying
//! a day: the registry of clients inside, the fixed set of tables with their
//! running totals, and the bounded queue of clients waiting for a table.
//!
//! # Usage Example
//!
//! ```rust
//! use club_simulator::club::*;
//! use club_simulator::types::{ClientId, ClockTime, TableId};
//!
//! let mut tables = Tables::new(2);
//! let table = TableId::new(1).unwrap();
//! tables.get_mut(table).unwrap().occupy(ClientId::new("alice").unwrap());
//!
//! let since = ClockTime::parse("09:00").unwrap();
//! let now = ClockTime::parse("10:30").unwrap();
//! let session = tables.get_mut(table).unwrap().release(since, now, 10);
//! assert_eq!(session.charge, 20);
//! ```

pub mod client;
pub mod queue;
pub mod registry;
pub mod table;

// Re-export all public types for convenience
pub use client::*;
pub use queue::*;
pub use registry::*;
pub use table::*;
