//! Enumeration types for the club simulator
//!
//! This module contains the numeric event codes of the club log format and
//! the output formats supported by the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric event codes of the club log format
///
/// Codes 1-4 are incoming events read from the input. Codes 11-13 are
/// produced by the simulation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCode {
    /// Client came into the club
    ClientArrived = 1,
    /// Client asked for a specific table
    ClientSeated = 2,
    /// Client is willing to wait for a table
    ClientWaiting = 3,
    /// Client left the club
    ClientLeft = 4,
    /// Client was made to leave (closing time or full queue)
    ClientForcedOut = 11,
    /// Client was moved from the queue to a freed table
    ClientAutoSeated = 12,
    /// An incoming event was rejected
    Error = 13,
}

impl EventCode {
    /// Numeric code as printed in the log
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up an incoming event code (1-4)
    pub fn incoming(code: u8) -> Option<Self> {
        match code {
            1 => Some(EventCode::ClientArrived),
            2 => Some(EventCode::ClientSeated),
            3 => Some(EventCode::ClientWaiting),
            4 => Some(EventCode::ClientLeft),
            _ => None,
        }
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Output formats for the simulation log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReportFormat {
    /// Plain text, one log line per entry
    #[default]
    Text,
    /// A single JSON document with the log, table report and statistics
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_codes_match_log_format() {
        assert_eq!(EventCode::ClientArrived.code(), 1);
        assert_eq!(EventCode::ClientSeated.code(), 2);
        assert_eq!(EventCode::ClientWaiting.code(), 3);
        assert_eq!(EventCode::ClientLeft.code(), 4);
        assert_eq!(EventCode::ClientForcedOut.code(), 11);
        assert_eq!(EventCode::ClientAutoSeated.code(), 12);
        assert_eq!(EventCode::Error.to_string(), "13");
    }

    #[test]
    fn test_incoming_lookup() {
        assert_eq!(EventCode::incoming(2), Some(EventCode::ClientSeated));
        assert_eq!(EventCode::incoming(0), None);
        assert_eq!(EventCode::incoming(5), None);
        assert_eq!(EventCode::incoming(11), None);
    }

    #[test]
    fn test_report_format_parsing() {
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("TEXT".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!("csv".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::default().to_string(), "text");
    }
}
