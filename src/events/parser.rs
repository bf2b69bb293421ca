//! Input file parsing and validation
//!
//! This module turns the text input of the simulator into a validated
//! [`ClubConfig`] and a chronologically ordered list of [`ClientEvent`]s.
//! Any malformed line is fatal for the whole run: parsing stops at the first
//! error, which carries the offending line so the caller can report it.

use serde::{Deserialize, Serialize};
use std::str::Lines;
use tracing::{debug, instrument};

use crate::events::{ClientAction, ClientEvent};
use crate::types::{ClientId, ClockTime, ClubConfig, EventCode, TableId};

/// Parsed and validated simulator input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubInput {
    /// Club configuration from the three header lines
    pub config: ClubConfig,
    /// Client events in input order
    pub events: Vec<ClientEvent>,
}

impl ClubInput {
    /// Parse a complete input document
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut parser = InputParser::new(text);
        let config = parser.parse_header()?;
        let events = parser.parse_events()?;

        debug!(
            "Parsed input: {} tables, {}-{}, rate {}, {} events",
            config.table_count,
            config.opening_time,
            config.closing_time,
            config.hourly_rate,
            events.len()
        );
        Ok(Self { config, events })
    }
}

/// Reasons an input document can be rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A required header line is missing
    #[error("missing {0} line")]
    MissingLine(&'static str),

    /// Table count is not a positive integer
    #[error("invalid table count: {0:?}")]
    InvalidTableCount(String),

    /// Working hours line is malformed or out of order
    #[error("invalid working hours: {0}")]
    InvalidWorkingHours(String),

    /// Hourly rate is not a positive integer
    #[error("invalid hourly rate: {0:?}")]
    InvalidHourlyRate(String),

    /// Event line is malformed
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    /// Event is earlier than the one before it
    #[error("event at {time} is earlier than the previous event at {previous}")]
    OutOfOrder {
        /// Time of the offending event
        time: ClockTime,
        /// Time of the previous event
        previous: ClockTime,
    },
}

/// Fatal input error with the position of the offending line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line_number}: {kind}")]
pub struct ParseError {
    /// 1-based number of the offending (or missing) line
    pub line_number: usize,
    /// Text of the offending line; for a missing line, the last line read
    pub line: Option<String>,
    /// What is wrong with it
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Line to show the user when reporting the error
    pub fn offending_line(&self) -> Option<&str> {
        self.line.as_deref()
    }
}

/// Line-by-line parser over an input document
struct InputParser<'a> {
    lines: Lines<'a>,
    line_number: usize,
    last_line: Option<&'a str>,
}

impl<'a> InputParser<'a> {
    fn new(text: &'a str) -> Self {
        Self { lines: text.lines(), line_number: 0, last_line: None }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line_number += 1;
        self.last_line = Some(line);
        Some(line)
    }

    fn require_line(&mut self, what: &'static str) -> Result<&'a str, ParseError> {
        match self.next_line() {
            Some(line) => Ok(line),
            None => Err(ParseError {
                line_number: self.line_number + 1,
                line: self.last_line.map(str::to_string),
                kind: ParseErrorKind::MissingLine(what),
            }),
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            line_number: self.line_number,
            line: self.last_line.map(str::to_string),
            kind,
        }
    }

    fn parse_header(&mut self) -> Result<ClubConfig, ParseError> {
        let line = self.require_line("table count")?;
        let table_count = parse_positive::<usize>(line.trim())
            .ok_or_else(|| self.error(ParseErrorKind::InvalidTableCount(line.to_string())))?;

        let line = self.require_line("working hours")?;
        let (opening_time, closing_time) = parse_working_hours(line)
            .map_err(|reason| self.error(ParseErrorKind::InvalidWorkingHours(reason)))?;

        let line = self.require_line("hourly rate")?;
        let hourly_rate = parse_positive::<u64>(line.trim())
            .ok_or_else(|| self.error(ParseErrorKind::InvalidHourlyRate(line.to_string())))?;

        let config = ClubConfig::new(table_count, opening_time, closing_time, hourly_rate);
        config
            .validate()
            .map_err(|e| self.error(ParseErrorKind::InvalidWorkingHours(e.to_string())))?;
        Ok(config)
    }

    fn parse_events(&mut self) -> Result<Vec<ClientEvent>, ParseError> {
        let mut events = Vec::new();
        let mut previous: Option<ClockTime> = None;

        while let Some(line) = self.next_line() {
            let event =
                parse_event(line).map_err(|reason| self.error(ParseErrorKind::InvalidEvent(reason)))?;

            if let Some(previous) = previous {
                if event.time < previous {
                    return Err(self.error(ParseErrorKind::OutOfOrder { time: event.time, previous }));
                }
            }
            previous = Some(event.time);
            events.push(event);
        }

        Ok(events)
    }
}

/// Parse a positive integer written as `[1-9][0-9]*`
fn parse_positive<T: std::str::FromStr>(token: &str) -> Option<T> {
    let bytes = token.as_bytes();
    let well_formed = !bytes.is_empty()
        && bytes[0] != b'0'
        && bytes.iter().all(u8::is_ascii_digit);
    if well_formed {
        token.parse().ok()
    } else {
        None
    }
}

fn parse_working_hours(line: &str) -> Result<(ClockTime, ClockTime), String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [opening, closing] = tokens.as_slice() else {
        return Err(format!("expected two times, got {} tokens", tokens.len()));
    };

    let opening = ClockTime::parse(opening)?;
    let closing = ClockTime::parse(closing)?;
    if opening >= closing {
        return Err(format!("opening ({}) must be before closing ({})", opening, closing));
    }
    Ok((opening, closing))
}

fn parse_event(line: &str) -> Result<ClientEvent, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(format!("expected at least 3 tokens, got {}", tokens.len()));
    }

    let time = ClockTime::parse(tokens[0])?;
    let code = parse_positive::<u8>(tokens[1])
        .and_then(EventCode::incoming)
        .ok_or_else(|| format!("unknown event code {:?}", tokens[1]))?;
    let client = ClientId::new(tokens[2])?;

    let action = match (code, tokens.len()) {
        (EventCode::ClientSeated, 4) => {
            let table = parse_positive::<usize>(tokens[3])
                .and_then(TableId::new)
                .ok_or_else(|| format!("invalid table number {:?}", tokens[3]))?;
            ClientAction::Sit(table)
        }
        (EventCode::ClientArrived, 3) => ClientAction::Arrive,
        (EventCode::ClientWaiting, 3) => ClientAction::Wait,
        (EventCode::ClientLeft, 3) => ClientAction::Leave,
        (code, count) => {
            return Err(format!("event code {} does not take {} tokens", code, count));
        }
    };

    Ok(ClientEvent::new(time, client, action))
}
