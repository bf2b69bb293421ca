//! Simulation engine and run control
//!
//! This module contains the event-processing engine, the run orchestrator,
//! statistics collection, logging setup and error handling.
//!
//! # Overview
//!
//! - **ClubEngine**: Replays one day of client events against the club state
//! - **SimulationOrchestrator**: Loads the input file, runs the engine and writes the output
//! - **SimulationLog**: Emitted lines, per-table report and run statistics
//! - **RuleViolation**: Per-event rule outcomes written to the log as error lines
//! - **SimulationError**: Errors that abort a run
//!
//! # Usage Example
//!
//! ```rust
//! use club_simulator::events::ClubInput;
//! use club_simulator::simulation::*;
//!
//! let input = ClubInput::parse("2\n09:00 19:00\n10\n09:00 1 alice\n09:00 2 alice 2\n").unwrap();
//! let log = ClubEngine::new(input.config).process(input.events);
//!
//! assert_eq!(log.lines.last().unwrap().to_string(), "2 100 10:00");
//! assert_eq!(log.statistics.closing_departures, 1);
//! ```

pub mod engine;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod statistics;

// Re-export all public types for convenience
pub use engine::*;
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use statistics::*;
