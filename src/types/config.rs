//! Configuration structures for the club simulator
//!
//! This module contains the club configuration read from the input header,
//! the command line arguments and the run settings resolved from them.

use super::{ClockTime, ReportFormat};
use crate::types::clock::MINUTES_PER_DAY;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "club-simulator",
    version,
    about = "Club Simulator - Replays a day of client events against a fixed pool of tables",
    long_about = "Replays a chronological log of client events (arrivals, seat requests, waits, departures) \
against a club with a fixed number of hourly-billed tables and prints the resulting event log \
followed by per-table revenue and occupied time.

INPUT FORMAT:
    <table count>
    <opening HH:MM> <closing HH:MM>
    <hourly rate>
    <HH:MM> <event code> <client> [<table>]
    ...

EXAMPLES:
    # Replay a day and print the log
    club-simulator day.txt

    # Write a JSON document with log, report and statistics
    club-simulator day.txt --format json --output day.json

    # Validate the input without running the simulation
    club-simulator day.txt --dry-run

    # Show run statistics on stderr
    club-simulator day.txt --summary --verbose"
)]
pub struct CliArgs {
    /// Input file with the club configuration and the event log
    #[arg(help = "Path to the input file")]
    pub input: PathBuf,

    /// Output file path (stdout if not given)
    #[arg(
        short,
        long,
        help = "Write the simulation log to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    /// Output format for the simulation log
    #[arg(
        long,
        default_value = "text",
        help = "Output format (text or json)",
        long_help = "Output format for the simulation log. Supported formats: text, json. Default: text"
    )]
    pub format: String,

    /// Print run statistics to stderr after the simulation
    #[arg(long, help = "Print run statistics to stderr")]
    pub summary: bool,

    /// Directory for rolling log files
    #[arg(long, help = "Also write logs to daily rolling files in this directory")]
    pub log_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate input without running the simulation
    #[arg(long, help = "Validate input without running the simulation")]
    pub dry_run: bool,
}

/// Settings for one simulator run, resolved from the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    /// Input file with the club configuration and the event log
    pub input: PathBuf,
    /// Output file path, stdout when `None`
    pub output: Option<PathBuf>,
    /// Output format name
    pub format: String,
    /// Whether to print run statistics to stderr
    pub summary: bool,
    /// Whether to stop after parsing and validating the input
    pub dry_run: bool,
}

impl RunSettings {
    /// Create settings for a run over `input` with default options
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            format: ReportFormat::default().to_string(),
            summary: false,
            dry_run: false,
        }
    }

    /// Create run settings from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Self {
        Self {
            input: args.input,
            output: args.output,
            format: args.format,
            summary: args.summary,
            dry_run: args.dry_run,
        }
    }

    /// Set the output file
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the output format name
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format.to_string();
        self
    }

    /// Get the output format as an enum value
    pub fn report_format(&self) -> Result<ReportFormat, String> {
        self.format.parse()
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.input.as_os_str().is_empty() {
            return Err("Input path must not be empty".to_string());
        }
        self.report_format()?;
        Ok(())
    }
}

/// Configuration of the club for one simulated day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubConfig {
    /// Number of tables in the club
    pub table_count: usize,
    /// Opening time; arrivals before it are rejected
    pub opening_time: ClockTime,
    /// Closing time; arrivals at or after it are rejected
    pub closing_time: ClockTime,
    /// Price of one started hour at a table
    pub hourly_rate: u64,
}

/// Validation errors for the club configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    /// Table count is invalid
    #[error("Table count must be greater than 0, got {0}")]
    InvalidTableCount(usize),

    /// Hourly rate is invalid
    #[error("Hourly rate must be greater than 0, got {0}")]
    InvalidHourlyRate(u64),

    /// Working hours are out of order
    #[error("Invalid working hours: opening ({opening}) must be before closing ({closing})")]
    InvalidWorkingHours {
        /// Opening time
        opening: ClockTime,
        /// Closing time
        closing: ClockTime,
    },
}

impl ClubConfig {
    /// Create a club configuration
    pub fn new(
        table_count: usize,
        opening_time: ClockTime,
        closing_time: ClockTime,
        hourly_rate: u64,
    ) -> Self {
        Self { table_count, opening_time, closing_time, hourly_rate }
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.table_count == 0 {
            return Err(ConfigValidationError::InvalidTableCount(self.table_count));
        }

        if self.hourly_rate == 0 {
            return Err(ConfigValidationError::InvalidHourlyRate(self.hourly_rate));
        }

        if self.opening_time >= self.closing_time
            || self.opening_time.minutes() >= MINUTES_PER_DAY
        {
            return Err(ConfigValidationError::InvalidWorkingHours {
                opening: self.opening_time,
                closing: self.closing_time,
            });
        }

        Ok(())
    }

    /// Whether the club accepts arrivals at `time`
    pub fn is_open_at(&self, time: ClockTime) -> bool {
        time >= self.opening_time && time < self.closing_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> ClockTime {
        ClockTime::from_hm(h, m).unwrap()
    }

    #[test]
    fn test_valid_config() {
        let config = ClubConfig::new(3, hm(9, 0), hm(19, 0), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_table_count() {
        let config = ClubConfig::new(0, hm(9, 0), hm(19, 0), 10);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTableCount(0)));
    }

    #[test]
    fn test_invalid_hourly_rate() {
        let config = ClubConfig::new(1, hm(9, 0), hm(19, 0), 0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidHourlyRate(0)));
    }

    #[test]
    fn test_invalid_working_hours() {
        let config = ClubConfig::new(1, hm(19, 0), hm(9, 0), 10);
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidWorkingHours { .. })
        ));

        let same = ClubConfig::new(1, hm(9, 0), hm(9, 0), 10);
        assert!(same.validate().is_err());
    }

    #[test]
    fn test_closing_at_midnight_is_allowed() {
        let config = ClubConfig::new(1, hm(9, 0), hm(24, 0), 10);
        assert!(config.validate().is_ok());
        assert!(config.is_open_at(hm(23, 59)));
    }

    #[test]
    fn test_open_window_excludes_closing_time() {
        let config = ClubConfig::new(1, hm(9, 0), hm(19, 0), 10);
        assert!(!config.is_open_at(hm(8, 59)));
        assert!(config.is_open_at(hm(9, 0)));
        assert!(config.is_open_at(hm(18, 59)));
        assert!(!config.is_open_at(hm(19, 0)));
    }

    #[test]
    fn test_run_settings_validation() {
        let settings = RunSettings::new("day.txt");
        assert!(settings.validate().is_ok());
        assert_eq!(settings.report_format().unwrap(), ReportFormat::Text);

        let mut bad_format = RunSettings::new("day.txt");
        bad_format.format = "xml".to_string();
        assert!(bad_format.validate().is_err());

        assert!(RunSettings::new("").validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = ClubConfig::new(2, hm(8, 0), hm(24, 0), 15);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"closing_time\":\"24:00\""));
        let back: ClubConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
