//! Statistics collection and reporting
//!
//! This module contains the per-table end-of-day report, the run statistics
//! gathered while replaying events, and the complete simulation log.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::club::Table;
use crate::events::{ClientAction, LogLine};
use crate::simulation::error::RuleViolation;
use crate::types::{format_duration, ClubConfig, TableId};

/// End-of-day figures for one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReport {
    /// Table number
    pub table: TableId,
    /// Total amount billed at the table
    pub revenue: u64,
    /// Total minutes the table was occupied
    pub occupied_minutes: u64,
    /// Number of seating episodes
    pub sessions: u32,
}

impl From<&Table> for TableReport {
    fn from(table: &Table) -> Self {
        Self {
            table: table.id,
            revenue: table.revenue,
            occupied_minutes: table.occupied_minutes,
            sessions: table.sessions,
        }
    }
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.table, self.revenue, format_duration(self.occupied_minutes))
    }
}

/// Number of rejected events per rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViolationCounts {
    /// Arrivals outside working hours
    pub not_open_yet: usize,
    /// Repeated arrivals
    pub you_shall_not_pass: usize,
    /// Events about clients not inside
    pub client_unknown: usize,
    /// Seat requests for busy or missing tables
    pub place_is_busy: usize,
    /// Wait requests while a table was free
    pub i_can_wait_no_longer: usize,
}

impl ViolationCounts {
    /// Count one violation
    pub fn record(&mut self, violation: RuleViolation) {
        match violation {
            RuleViolation::NotOpenYet => self.not_open_yet += 1,
            RuleViolation::YouShallNotPass => self.you_shall_not_pass += 1,
            RuleViolation::ClientUnknown => self.client_unknown += 1,
            RuleViolation::PlaceIsBusy => self.place_is_busy += 1,
            RuleViolation::ICanWaitNoLonger => self.i_can_wait_no_longer += 1,
        }
    }

    /// Count for a single rule
    pub fn get(&self, violation: RuleViolation) -> usize {
        match violation {
            RuleViolation::NotOpenYet => self.not_open_yet,
            RuleViolation::YouShallNotPass => self.you_shall_not_pass,
            RuleViolation::ClientUnknown => self.client_unknown,
            RuleViolation::PlaceIsBusy => self.place_is_busy,
            RuleViolation::ICanWaitNoLonger => self.i_can_wait_no_longer,
        }
    }

    /// Total number of rejected events
    pub fn total(&self) -> usize {
        RuleViolation::ALL.iter().map(|v| self.get(*v)).sum()
    }
}

/// Counters gathered while replaying one day
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Incoming events processed
    pub events_processed: usize,
    /// Incoming arrivals
    pub arrivals: usize,
    /// Incoming seat requests
    pub seat_requests: usize,
    /// Incoming wait requests
    pub wait_requests: usize,
    /// Incoming departures
    pub departures: usize,
    /// Rejected events per rule
    pub violations: ViolationCounts,
    /// Clients seated from the queue
    pub auto_seatings: usize,
    /// Clients sent away because the queue was full
    pub overflow_departures: usize,
    /// Clients still inside at closing time
    pub closing_departures: usize,
    /// Longest the waiting queue got
    pub peak_queue_length: usize,
    /// Most tables occupied at once
    pub peak_occupied_tables: usize,
    /// Revenue across all tables
    pub total_revenue: u64,
    /// Occupied minutes across all tables
    pub total_occupied_minutes: u64,
}

impl RunStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one incoming event
    pub fn record_incoming(&mut self, action: ClientAction) {
        self.events_processed += 1;
        match action {
            ClientAction::Arrive => self.arrivals += 1,
            ClientAction::Sit(_) => self.seat_requests += 1,
            ClientAction::Wait => self.wait_requests += 1,
            ClientAction::Leave => self.departures += 1,
        }
    }

    /// Track queue and table occupancy high-water marks
    pub fn observe_occupancy(&mut self, queue_length: usize, occupied_tables: usize) {
        self.peak_queue_length = self.peak_queue_length.max(queue_length);
        self.peak_occupied_tables = self.peak_occupied_tables.max(occupied_tables);
    }

    /// Add the final table totals
    pub fn record_tables(&mut self, tables: &[TableReport]) {
        self.total_revenue = tables.iter().fold(0u64, |total, t| total.saturating_add(t.revenue));
        self.total_occupied_minutes = tables.iter().map(|t| t.occupied_minutes).sum();
    }

    /// Human-readable summary for the end of a run
    pub fn summary(&self) -> String {
        let mut output = String::new();
        output.push_str("Run Summary\n");
        output.push_str("===========\n");
        output.push_str(&format!(
            "Events processed: {} ({} arrivals, {} seat requests, {} wait requests, {} departures)\n",
            self.events_processed,
            self.arrivals,
            self.seat_requests,
            self.wait_requests,
            self.departures
        ));
        output.push_str(&format!("Rejected events: {}\n", self.violations.total()));
        for violation in RuleViolation::ALL {
            let count = self.violations.get(violation);
            if count > 0 {
                output.push_str(&format!("  {}: {}\n", violation, count));
            }
        }
        output.push_str(&format!("Seated from queue: {}\n", self.auto_seatings));
        output.push_str(&format!(
            "Forced departures: {} (queue full: {}, closing: {})\n",
            self.overflow_departures + self.closing_departures,
            self.overflow_departures,
            self.closing_departures
        ));
        output.push_str(&format!(
            "Peak occupancy: {} tables, {} waiting\n",
            self.peak_occupied_tables, self.peak_queue_length
        ));
        output.push_str(&format!(
            "Total revenue: {} over {}\n",
            self.total_revenue,
            format_duration(self.total_occupied_minutes)
        ));
        output
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} events, {} rejected, revenue {}",
            self.events_processed,
            self.violations.total(),
            self.total_revenue
        )
    }
}

/// Complete output of one simulated day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationLog {
    /// Configuration the day was simulated with
    pub config: ClubConfig,
    /// Every emitted line, in emission order, report lines included
    pub lines: Vec<LogLine>,
    /// Per-table report in table order
    pub tables: Vec<TableReport>,
    /// Run counters
    pub statistics: RunStatistics,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    config: &'a ClubConfig,
    log: Vec<String>,
    tables: &'a [TableReport],
    statistics: &'a RunStatistics,
}

impl SimulationLog {
    /// Render the log as text, one line per entry
    pub fn render_text(&self) -> String {
        let mut output = String::new();
        for line in &self.lines {
            output.push_str(&line.to_string());
            output.push('\n');
        }
        output
    }

    /// Render the log, report and statistics as a JSON document
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let document = JsonDocument {
            config: &self.config,
            log: self.lines.iter().map(ToString::to_string).collect(),
            tables: &self.tables,
            statistics: &self.statistics,
        };
        serde_json::to_string_pretty(&document)
    }

    /// Report for one table
    pub fn table(&self, table: TableId) -> Option<&TableReport> {
        self.tables.iter().find(|t| t.table == table)
    }
}
