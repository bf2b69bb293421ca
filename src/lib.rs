//! Club Simulator
//!
//! Replays one day of client events against a club with a fixed pool of
//! hourly-billed tables and produces the club's event log together with the
//! end-of-day revenue and occupied time of every table.
//!
//! # Overview
//!
//! The input is a small text document: three header lines (table count,
//! working hours, hourly rate) followed by chronological client events. Each
//! event is echoed to the log and then either applied to the club state or
//! rejected with a diagnostic line. The club also produces events of its own:
//! it seats the first waiting client when a table is freed, and it sends
//! clients away when the waiting queue is full or the club closes.
//!
//! ## Key Features
//!
//! - **Strict Input Parsing**: The first malformed line aborts the run and is reported back
//! - **Table Billing**: Every seating episode is billed per started hour
//! - **Waiting Queue**: FIFO queue bounded by the number of tables
//! - **Structured Output**: Plain text log or a JSON document with run statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use club_simulator::*;
//!
//! let input = ClubInput::parse(
//!     "1\n09:00 19:00\n10\n09:00 1 alice\n09:00 2 alice 1\n09:45 4 alice\n",
//! )?;
//! let log = simulate_day(input.config, input.events);
//!
//! assert_eq!(
//!     log.render_text(),
//!     "09:00\n09:00 1 alice\n09:00 2 alice 1\n09:45 4 alice\n19:00\n1 10 00:45\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Clock times, identifiers, enums and configuration
//! - [`events`]: Client events, log lines and the input parser
//! - [`club`]: Clients, tables and the waiting queue
//! - [`simulation`]: Event-processing engine, orchestration and reporting
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Events    │    │    Club     │
//! │             │    │             │    │             │
//! │ ClockTime   │◄───┤ Parser      │    │ Tables      │
//! │ Identifiers │    │ Log lines   │    │ Queue       │
//! │ Config      │    │             │    │ Clients     │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                            ▲                   ▲
//!                            │                   │
//!                    ┌───────────────────────────────┐
//!                    │          Simulation           │
//!                    │                               │
//!                    │ Orchestrator ──► ClubEngine   │
//!                    │ Statistics      Errors        │
//!                    └───────────────────────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod club;
pub mod events;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    ClientId, ClockTime, ClubConfig, ConfigValidationError, EventCode, ReportFormat, RunSettings,
    TableId,
};

// Club state
pub use club::{ClientRegistry, ClientStatus, Table, Tables, WaitingQueue};

// Event types and parsing
pub use events::{ClientAction, ClientEvent, ClubInput, LogLine, ParseError};

// Simulation types and functionality
pub use simulation::{
    simulate_day, ClubEngine, LoggingConfig, RuleViolation, RunStatistics, SimulationError,
    SimulationLog, SimulationOrchestrator, SimulationResult, TableReport,
};
