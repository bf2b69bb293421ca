//! Client events and simulation log lines
//!
//! This module contains the typed incoming events consumed by the engine and
//! the log lines it emits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::simulation::error::RuleViolation;
use crate::simulation::statistics::TableReport;
use crate::types::{ClientId, ClockTime, EventCode, TableId};

/// What a client does in an incoming event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientAction {
    /// Client comes into the club (code 1)
    Arrive,
    /// Client asks for a specific table (code 2)
    Sit(TableId),
    /// Client wants to wait for a table (code 3)
    Wait,
    /// Client leaves the club (code 4)
    Leave,
}

impl ClientAction {
    /// Event code of the action in the log format
    pub fn code(self) -> EventCode {
        match self {
            ClientAction::Arrive => EventCode::ClientArrived,
            ClientAction::Sit(_) => EventCode::ClientSeated,
            ClientAction::Wait => EventCode::ClientWaiting,
            ClientAction::Leave => EventCode::ClientLeft,
        }
    }

    /// Table number carried by the action, if any
    pub fn table(self) -> Option<TableId> {
        match self {
            ClientAction::Sit(table) => Some(table),
            _ => None,
        }
    }
}

/// An incoming client event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEvent {
    /// When the event happened
    pub time: ClockTime,
    /// Client the event is about
    pub client: ClientId,
    /// What the client did
    pub action: ClientAction,
}

impl ClientEvent {
    /// Create a new client event
    pub fn new(time: ClockTime, client: ClientId, action: ClientAction) -> Self {
        Self { time, client, action }
    }

    /// Log line echoing this event
    pub fn echo(&self) -> LogLine {
        LogLine::Event {
            time: self.time,
            code: self.action.code(),
            client: self.client.clone(),
            table: self.action.table(),
        }
    }
}

/// One line of the simulation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLine {
    /// Opening time, first line of the log
    Opening(ClockTime),
    /// Echoed or synthetic client event
    Event {
        /// Time of the event
        time: ClockTime,
        /// Event code
        code: EventCode,
        /// Client involved
        client: ClientId,
        /// Table involved, for seating events
        table: Option<TableId>,
    },
    /// Rejected incoming event
    Error {
        /// Time of the rejected event
        time: ClockTime,
        /// Why it was rejected
        violation: RuleViolation,
    },
    /// Closing time, printed after the closing departures
    Closing(ClockTime),
    /// Per-table revenue and occupied time
    Table(TableReport),
}

impl LogLine {
    /// Client forced to leave at `time`
    pub fn forced_out(time: ClockTime, client: ClientId) -> Self {
        LogLine::Event { time, code: EventCode::ClientForcedOut, client, table: None }
    }

    /// Client moved from the queue to `table` at `time`
    pub fn auto_seated(time: ClockTime, client: ClientId, table: TableId) -> Self {
        LogLine::Event { time, code: EventCode::ClientAutoSeated, client, table: Some(table) }
    }

    /// Event code of this line, if it is an event or error line
    pub fn code(&self) -> Option<EventCode> {
        match self {
            LogLine::Event { code, .. } => Some(*code),
            LogLine::Error { .. } => Some(EventCode::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLine::Opening(time) | LogLine::Closing(time) => write!(f, "{}", time),
            LogLine::Event { time, code, client, table: Some(table) } => {
                write!(f, "{} {} {} {}", time, code, client, table)
            }
            LogLine::Event { time, code, client, table: None } => {
                write!(f, "{} {} {}", time, code, client)
            }
            LogLine::Error { time, violation } => {
                write!(f, "{} {} {}", time, EventCode::Error, violation)
            }
            LogLine::Table(report) => write!(f, "{}", report),
        }
    }
}
