//! Event-processing engine for one simulated day
//!
//! The engine owns all mutable club state for a run. It consumes client
//! events in order, echoes each one to the log, applies it or rejects it with
//! a [`RuleViolation`], and emits the synthetic events the club produces on its
//! own: seating the head of the waiting queue when a table is freed, and
//! sending clients away when the queue is full or the club closes.

use tracing::{debug, info, instrument, warn};

use crate::club::{ClientRecord, ClientRegistry, Tables, WaitingQueue};
use crate::events::{ClientAction, ClientEvent, LogLine};
use crate::simulation::error::RuleViolation;
use crate::simulation::statistics::{RunStatistics, SimulationLog, TableReport};
use crate::types::{ClientId, ClockTime, ClubConfig, TableId};

/// Result of applying one event: the synthetic follow-up lines, or the rule
/// the event broke
type Outcome = Result<Vec<LogLine>, RuleViolation>;

/// Replays client events against the club's tables and waiting queue
#[derive(Debug)]
pub struct ClubEngine {
    config: ClubConfig,
    clients: ClientRegistry,
    tables: Tables,
    queue: WaitingQueue,
    lines: Vec<LogLine>,
    statistics: RunStatistics,
}

impl ClubEngine {
    /// Create an engine for a day with the given configuration
    ///
    /// The log starts with the opening time.
    pub fn new(config: ClubConfig) -> Self {
        Self {
            config,
            clients: ClientRegistry::new(),
            tables: Tables::new(config.table_count),
            queue: WaitingQueue::new(config.table_count),
            lines: vec![LogLine::Opening(config.opening_time)],
            statistics: RunStatistics::new(),
        }
    }

    /// Process every event in order, then close the day
    #[instrument(skip(self, events), fields(tables = self.config.table_count))]
    pub fn process<I>(mut self, events: I) -> SimulationLog
    where
        I: IntoIterator<Item = ClientEvent>,
    {
        for event in events {
            self.handle_event(event);
        }
        self.finish()
    }

    /// Echo and apply a single event
    pub fn handle_event(&mut self, event: ClientEvent) {
        self.lines.push(event.echo());
        self.statistics.record_incoming(event.action);

        let ClientEvent { time, client, action } = event;
        debug!("{} {} {:?}", time, client, action);

        let outcome = match action {
            ClientAction::Arrive => self.arrive(time, client),
            ClientAction::Sit(table) => self.sit(time, client, table),
            ClientAction::Wait => self.wait(time, client),
            ClientAction::Leave => self.leave(time, client),
        };

        match outcome {
            Ok(follow_up) => self.lines.extend(follow_up),
            Err(violation) => {
                debug!("Rejected at {}: {}", time, violation);
                self.statistics.violations.record(violation);
                self.lines.push(LogLine::Error { time, violation });
            }
        }

        self.statistics.observe_occupancy(self.queue.len(), self.tables.occupied_count());
        debug_assert!(self.invariants_hold(), "club state invariants broken at {}", time);
    }

    /// Send everyone home at closing time and produce the day's log
    pub fn finish(mut self) -> SimulationLog {
        let closing = self.config.closing_time;

        for (client, mut record) in self.clients.drain_sorted() {
            if let Some((table, since)) = record.stand_up() {
                self.release_table(table, since, closing);
            }
            self.lines.push(LogLine::forced_out(closing, client));
            self.statistics.closing_departures += 1;
        }
        while self.queue.pop().is_some() {}

        self.lines.push(LogLine::Closing(closing));

        let tables: Vec<TableReport> = self.tables.iter().map(TableReport::from).collect();
        self.lines.extend(tables.iter().copied().map(LogLine::Table));
        self.statistics.record_tables(&tables);

        info!(
            "Day closed: {} events, {} rejected, revenue {}",
            self.statistics.events_processed,
            self.statistics.violations.total(),
            self.statistics.total_revenue
        );

        SimulationLog {
            config: self.config,
            lines: self.lines,
            tables,
            statistics: self.statistics,
        }
    }

    fn arrive(&mut self, time: ClockTime, client: ClientId) -> Outcome {
        if !self.config.is_open_at(time) {
            return Err(RuleViolation::NotOpenYet);
        }
        if !self.clients.insert(client, ClientRecord::new(time)) {
            return Err(RuleViolation::YouShallNotPass);
        }
        Ok(Vec::new())
    }

    fn sit(&mut self, time: ClockTime, client: ClientId, table: TableId) -> Outcome {
        let record = self.clients.get_mut(&client).ok_or(RuleViolation::ClientUnknown)?;
        if !self.tables.is_available(table) {
            return Err(RuleViolation::PlaceIsBusy);
        }

        if record.is_waiting() {
            self.queue.remove(&client);
        }
        let previous = record.stand_up();
        record.seat(table, time);

        if let Some(slot) = self.tables.get_mut(table) {
            slot.occupy(client.clone());
        }
        debug!("{} sat at table {}", client, table);

        match previous {
            Some((old_table, since)) => {
                self.release_table(old_table, since, time);
                Ok(self.seat_next_from_queue(old_table, time).into_iter().collect())
            }
            None => Ok(Vec::new()),
        }
    }

    fn wait(&mut self, time: ClockTime, client: ClientId) -> Outcome {
        let record = self.clients.get(&client).ok_or(RuleViolation::ClientUnknown)?;
        let has_place = record.is_seated() || record.is_waiting();
        if self.tables.has_free() {
            return Err(RuleViolation::ICanWaitNoLonger);
        }
        if self.queue.is_full() {
            return Ok(self.send_away(time, client));
        }
        if has_place {
            debug!("{} already has a place, wait request ignored", client);
            return Ok(Vec::new());
        }

        match self.queue.push(client.clone()) {
            Ok(()) => {
                if let Some(record) = self.clients.get_mut(&client) {
                    record.start_waiting();
                }
                debug!("{} queued, {} waiting", client, self.queue.len());
                Ok(Vec::new())
            }
            Err(client) => Ok(self.send_away(time, client)),
        }
    }

    fn leave(&mut self, time: ClockTime, client: ClientId) -> Outcome {
        let mut record = self.clients.remove(&client).ok_or(RuleViolation::ClientUnknown)?;
        if record.is_waiting() {
            self.queue.remove(&client);
        }

        match record.stand_up() {
            Some((table, since)) => {
                self.release_table(table, since, time);
                Ok(self.seat_next_from_queue(table, time).into_iter().collect())
            }
            None => Ok(Vec::new()),
        }
    }

    /// Turn a client away because the queue is full
    ///
    /// A client who held a table pays for the episode and the table goes to
    /// the head of the queue.
    fn send_away(&mut self, time: ClockTime, client: ClientId) -> Vec<LogLine> {
        debug!("Queue full, {} sent away", client);
        self.statistics.overflow_departures += 1;

        let record = self.clients.remove(&client);
        if record.as_ref().is_some_and(ClientRecord::is_waiting) {
            self.queue.remove(&client);
        }

        let mut lines = vec![LogLine::forced_out(time, client)];
        if let Some((table, since)) = record.and_then(|mut r| r.stand_up()) {
            self.release_table(table, since, time);
            lines.extend(self.seat_next_from_queue(table, time));
        }
        lines
    }

    fn release_table(&mut self, table: TableId, since: ClockTime, now: ClockTime) {
        match self.tables.get_mut(table) {
            Some(slot) => {
                slot.release(since, now, self.config.hourly_rate);
            }
            None => warn!("Release of nonexistent table {}", table),
        }
    }

    /// Give a just-freed table to the first client in the queue
    fn seat_next_from_queue(&mut self, table: TableId, time: ClockTime) -> Option<LogLine> {
        while let Some(next) = self.queue.pop() {
            let Some(record) = self.clients.get_mut(&next) else {
                warn!("Queued client {} is no longer inside", next);
                continue;
            };
            record.seat(table, time);

            if let Some(slot) = self.tables.get_mut(table) {
                slot.occupy(next.clone());
            }
            self.statistics.auto_seatings += 1;
            debug!("{} seated from queue at table {}", next, table);
            return Some(LogLine::auto_seated(time, next, table));
        }
        None
    }

    /// Check the structural invariants of the club state
    ///
    /// Every occupied table is held by a client seated at that table, every
    /// seated client holds its table, every queued client is inside and
    /// waiting, and the queue is within capacity.
    pub fn invariants_hold(&self) -> bool {
        let tables_consistent = self.tables.iter().all(|table| match &table.occupant {
            Some(client) => self.clients.get(client).and_then(ClientRecord::table) == Some(table.id),
            None => true,
        });

        let seated = self.tables.occupied_count();
        let queue_consistent = self.queue.len() <= self.queue.capacity()
            && self
                .queue
                .iter()
                .all(|client| self.clients.get(client).is_some_and(ClientRecord::is_waiting));
        let waiting_consistent = self.clients.waiting_count() == self.queue.len();

        tables_consistent
            && queue_consistent
            && waiting_consistent
            && self.clients.seated_count() == seated
    }

    /// Club configuration
    pub fn config(&self) -> &ClubConfig {
        &self.config
    }

    /// Clients currently inside
    pub fn clients(&self) -> &ClientRegistry {
        &self.clients
    }

    /// Tables and their running totals
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Clients waiting for a table
    pub fn queue(&self) -> &WaitingQueue {
        &self.queue
    }

    /// Lines emitted so far
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }
}

/// Replay a whole day in one call
pub fn simulate_day<I>(config: ClubConfig, events: I) -> SimulationLog
where
    I: IntoIterator<Item = ClientEvent>,
{
    ClubEngine::new(config).process(events)
}
