//! Core types and identifiers for the club simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: client names and 1-based table numbers
//! - **Clock**: minute-resolution time of day, duration formatting and billing hours
//! - **Enums**: numeric event codes and output formats
//! - **Configuration**: club configuration, CLI arguments and run settings
//!
//! # Usage Example
//!
//! ```rust
//! use club_simulator::types::*;
//!
//! let opening = ClockTime::parse("09:00").unwrap();
//! let closing = ClockTime::parse("19:00").unwrap();
//! let config = ClubConfig::new(3, opening, closing, 10);
//! assert!(config.validate().is_ok());
//!
//! let client = ClientId::new("client1").unwrap();
//! let table = TableId::new(2).unwrap();
//! assert_eq!(format!("{} {}", client, table), "client1 2");
//! ```

pub mod clock;
pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use clock::*;
pub use config::*;
pub use enums::*;
pub use identifiers::*;
