//! Error types and handling
//!
//! Errors come in two tiers. [`SimulationError`] is fatal for the run: bad
//! input, unreadable files, failed output. [`RuleViolation`] is a per-event
//! outcome of the club rules; it is written to the log as an error line and
//! the run continues with the next event.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::ParseError;
use crate::types::ConfigValidationError;

/// Errors that abort a simulation run
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Input document is malformed
    #[error("Invalid input: {0}")]
    Input(#[from] ParseError),

    /// Club configuration validation failed
    #[error("Configuration validation failed: {0}")]
    Configuration(#[from] ConfigValidationError),

    /// Run settings are invalid
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimulationError {
    /// Create a settings error
    pub fn settings_error(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::Input(_) => "Input",
            SimulationError::Configuration(_) => "Configuration",
            SimulationError::Settings(_) => "Settings",
            SimulationError::Io(_) => "IO",
            SimulationError::Serialization(_) => "Serialization",
        }
    }

    /// The input line to echo back to the user, for input errors
    pub fn offending_line(&self) -> Option<&str> {
        match self {
            SimulationError::Input(err) => err.offending_line(),
            _ => None,
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Club rule broken by an incoming event
///
/// The `Display` text is the exact diagnostic written after the `13` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum RuleViolation {
    /// Arrival outside working hours
    #[error("NotOpenYet")]
    NotOpenYet,

    /// Arrival of a client who is already inside
    #[error("YouShallNotPass")]
    YouShallNotPass,

    /// Event about a client who is not inside
    #[error("ClientUnknown")]
    ClientUnknown,

    /// Seat request for an occupied or nonexistent table
    #[error("PlaceIsBusy")]
    PlaceIsBusy,

    /// Wait request while a table is free
    #[error("ICanWaitNoLonger!")]
    ICanWaitNoLonger,
}

impl RuleViolation {
    /// All violations in a stable order
    pub const ALL: [RuleViolation; 5] = [
        RuleViolation::NotOpenYet,
        RuleViolation::YouShallNotPass,
        RuleViolation::ClientUnknown,
        RuleViolation::PlaceIsBusy,
        RuleViolation::ICanWaitNoLonger,
    ];
}
