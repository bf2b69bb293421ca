//! Client events, log lines and input parsing
//!
//! This module contains the incoming client events the simulation consumes,
//! the lines of the simulation log it produces, and the parser that turns the
//! text input into a validated configuration and event stream.
//!
//! # Usage Example
//!
//! ```rust
//! use club_simulator::events::*;
//!
//! let input = ClubInput::parse("1\n08:00 09:00\n10\n08:00 1 client1\n").unwrap();
//! assert_eq!(input.config.table_count, 1);
//! assert_eq!(input.events.len(), 1);
//! assert_eq!(input.events[0].echo().to_string(), "08:00 1 client1");
//! ```

pub mod club_event;
pub mod parser;

// Re-export all public types for convenience
pub use club_event::*;
pub use parser::*;
