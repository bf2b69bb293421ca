//! End-to-end scenarios for the club engine
//!
//! Each test replays a small day through the public API and checks the
//! emitted log lines and the per-table report.

use club_simulator::*;

fn hm(h: u32, m: u32) -> ClockTime {
    ClockTime::from_hm(h, m).unwrap()
}

fn client(name: &str) -> ClientId {
    ClientId::new(name).unwrap()
}

fn table(n: usize) -> TableId {
    TableId::new(n).unwrap()
}

fn event(h: u32, m: u32, name: &str, action: ClientAction) -> ClientEvent {
    ClientEvent::new(hm(h, m), client(name), action)
}

fn run(input: &str) -> SimulationLog {
    let input = ClubInput::parse(input).unwrap();
    simulate_day(input.config, input.events)
}

fn text_lines(log: &SimulationLog) -> Vec<String> {
    log.lines.iter().map(ToString::to_string).collect()
}

/// A full day exercising every diagnostic and synthetic event
#[test]
fn test_full_day_output() {
    let input = "\
3
09:00 19:00
10
08:48 1 client1
09:41 1 client1
09:48 1 client2
09:52 3 client1
09:54 2 client1 1
10:25 2 client2 2
10:58 1 client3
10:59 2 client3 3
11:30 1 client4
11:35 2 client4 2
11:45 3 client4
12:33 4 client1
12:43 4 client2
15:52 4 client4
";

    let expected = "\
09:00
08:48 1 client1
08:48 13 NotOpenYet
09:41 1 client1
09:48 1 client2
09:52 3 client1
09:52 13 ICanWaitNoLonger!
09:54 2 client1 1
10:25 2 client2 2
10:58 1 client3
10:59 2 client3 3
11:30 1 client4
11:35 2 client4 2
11:35 13 PlaceIsBusy
11:45 3 client4
12:33 4 client1
12:33 12 client4 1
12:43 4 client2
15:52 4 client4
19:00 11 client3
19:00
1 70 05:58
2 30 02:18
3 90 08:01
";

    let log = run(input);
    assert_eq!(log.render_text(), expected);

    let stats = &log.statistics;
    assert_eq!(stats.events_processed, 14);
    assert_eq!(stats.violations.total(), 3);
    assert_eq!(stats.auto_seatings, 1);
    assert_eq!(stats.closing_departures, 1);
    assert_eq!(stats.total_revenue, 190);
    assert_eq!(log.table(table(1)).unwrap().sessions, 2);
}

#[test]
fn test_single_session_is_billed_per_started_hour() {
    let log = simulate_day(
        ClubConfig::new(1, hm(8, 0), hm(9, 0), 10),
        vec![
            event(8, 0, "client1", ClientAction::Arrive),
            event(8, 5, "client1", ClientAction::Sit(table(1))),
            event(8, 50, "client1", ClientAction::Leave),
        ],
    );

    let report = log.table(table(1)).unwrap();
    assert_eq!(report.revenue, 10);
    assert_eq!(report.occupied_minutes, 45);
    assert_eq!(report.to_string(), "1 10 00:45");
}

#[test]
fn test_departure_hands_table_to_waiting_client() {
    let log = simulate_day(
        ClubConfig::new(1, hm(8, 0), hm(20, 0), 10),
        vec![
            event(8, 0, "a", ClientAction::Arrive),
            event(8, 0, "a", ClientAction::Sit(table(1))),
            event(8, 10, "b", ClientAction::Arrive),
            event(8, 10, "b", ClientAction::Wait),
            event(8, 30, "a", ClientAction::Leave),
        ],
    );

    let lines = text_lines(&log);
    let departure = lines.iter().position(|l| l == "08:30 4 a").unwrap();
    assert_eq!(lines[departure + 1], "08:30 12 b 1");
    assert!(lines.contains(&"20:00 11 b".to_string()));
}

#[test]
fn test_unknown_client_changes_nothing() {
    let log = simulate_day(
        ClubConfig::new(2, hm(8, 0), hm(9, 0), 10),
        vec![event(8, 15, "ghost", ClientAction::Sit(table(1)))],
    );

    assert_eq!(
        text_lines(&log),
        vec!["08:00", "08:15 2 ghost 1", "08:15 13 ClientUnknown", "09:00", "1 0 00:00", "2 0 00:00"]
    );
}

#[test]
fn test_each_episode_is_rounded_separately() {
    let log = simulate_day(
        ClubConfig::new(2, hm(8, 0), hm(12, 0), 10),
        vec![
            event(8, 0, "a", ClientAction::Arrive),
            event(8, 0, "a", ClientAction::Sit(table(1))),
            event(8, 30, "a", ClientAction::Sit(table(2))),
            event(8, 30, "b", ClientAction::Arrive),
            event(8, 30, "b", ClientAction::Sit(table(1))),
            event(9, 0, "b", ClientAction::Leave),
            event(9, 0, "a", ClientAction::Leave),
        ],
    );

    let report = log.table(table(1)).unwrap();
    assert_eq!(report.occupied_minutes, 60);
    assert_eq!(report.sessions, 2);
    assert_eq!(report.revenue, 20);
}

#[test]
fn test_queue_overflow_forces_departure() {
    let log = simulate_day(
        ClubConfig::new(1, hm(8, 0), hm(9, 0), 10),
        vec![
            event(8, 0, "a", ClientAction::Arrive),
            event(8, 0, "a", ClientAction::Sit(table(1))),
            event(8, 1, "b", ClientAction::Arrive),
            event(8, 1, "b", ClientAction::Wait),
            event(8, 2, "c", ClientAction::Arrive),
            event(8, 2, "c", ClientAction::Wait),
            event(8, 3, "c", ClientAction::Leave),
        ],
    );

    let lines = text_lines(&log);
    assert!(lines.contains(&"08:02 11 c".to_string()));
    assert!(lines.contains(&"08:03 13 ClientUnknown".to_string()));
    assert_eq!(log.statistics.overflow_departures, 1);
    assert_eq!(log.statistics.peak_queue_length, 1);
}

#[test]
fn test_closing_sends_clients_away_in_name_order() {
    let log = simulate_day(
        ClubConfig::new(3, hm(8, 0), hm(9, 0), 10),
        vec![
            event(8, 0, "client2", ClientAction::Arrive),
            event(8, 0, "client10", ClientAction::Arrive),
            event(8, 0, "alice", ClientAction::Arrive),
            event(8, 1, "client2", ClientAction::Sit(table(3))),
            event(8, 1, "alice", ClientAction::Sit(table(1))),
        ],
    );

    let lines = text_lines(&log);
    let closing: Vec<&str> = lines
        .iter()
        .filter(|l| l.starts_with("09:00 11 "))
        .map(String::as_str)
        .collect();
    assert_eq!(closing, vec!["09:00 11 alice", "09:00 11 client10", "09:00 11 client2"]);

    assert_eq!(log.table(table(1)).unwrap().to_string(), "1 10 00:59");
    assert_eq!(log.table(table(2)).unwrap().to_string(), "2 0 00:00");
    assert_eq!(log.table(table(3)).unwrap().to_string(), "3 10 00:59");
}

#[test]
fn test_replay_is_deterministic() {
    let input = "2\n10:00 22:00\n15\n10:05 1 bob\n10:06 2 bob 2\n10:07 1 amy\n10:08 3 amy\n13:00 4 bob\n";
    let first = run(input);
    let second = run(input);
    assert_eq!(first, second);
    assert_eq!(first.render_text(), second.render_text());
}

#[test]
fn test_closing_line_precedes_table_report() {
    let log = run("2\n09:00 10:00\n5\n");
    assert_eq!(text_lines(&log), vec!["09:00", "10:00", "1 0 00:00", "2 0 00:00"]);
    assert_eq!(log.statistics.events_processed, 0);
}

#[test]
fn test_every_emitted_line_is_in_time_order() {
    let log = run("1\n09:00 12:00\n10\n09:00 1 a\n09:10 2 a 1\n09:20 1 b\n09:30 3 b\n10:00 4 a\n");
    let times: Vec<ClockTime> = log
        .lines
        .iter()
        .filter_map(|line| match line {
            LogLine::Event { time, .. } | LogLine::Error { time, .. } => Some(*time),
            _ => None,
        })
        .collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_huge_hourly_rate_does_not_overflow() {
    let log = run("2\n09:00 19:00\n18446744073709551615\n09:00 1 a\n09:00 2 a 1\n09:00 1 b\n09:00 2 b 2\n11:00 4 a\n");

    assert_eq!(log.table(table(1)).unwrap().revenue, u64::MAX);
    assert_eq!(log.table(table(2)).unwrap().revenue, u64::MAX);
    assert_eq!(log.statistics.total_revenue, u64::MAX);
    assert_eq!(log.lines.last().unwrap().to_string(), "2 18446744073709551615 10:00");
}

#[test]
fn test_wait_from_seated_client_when_queue_is_full() {
    let log = run("1\n09:00 19:00\n100\n09:00 1 a\n09:00 2 a 1\n09:01 1 b\n09:01 3 b\n09:03 3 a\n");

    let lines = text_lines(&log);
    let wait = lines.iter().position(|l| l == "09:03 3 a").unwrap();
    assert_eq!(lines[wait + 1], "09:03 11 a");
    assert_eq!(lines[wait + 2], "09:03 12 b 1");
    assert!(!lines.contains(&"19:00 11 a".to_string()));
    assert!(lines.contains(&"19:00 11 b".to_string()));

    let report = log.table(table(1)).unwrap();
    assert_eq!(report.sessions, 2);
    assert_eq!(report.occupied_minutes, 600);
    assert_eq!(report.revenue, 1100);
    assert_eq!(log.statistics.overflow_departures, 1);
    assert_eq!(log.statistics.auto_seatings, 1);
}

#[test]
fn test_wait_from_seated_client_with_room_in_queue_changes_nothing() {
    let log = run("1\n09:00 19:00\n10\n09:00 1 a\n09:00 2 a 1\n09:03 3 a\n");

    let lines = text_lines(&log);
    let wait = lines.iter().position(|l| l == "09:03 3 a").unwrap();
    assert_eq!(lines[wait + 1], "19:00 11 a");
    assert_eq!(log.table(table(1)).unwrap().to_string(), "1 100 10:00");
}
