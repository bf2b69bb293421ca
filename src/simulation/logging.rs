//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the simulator.
//! Diagnostics always go to stderr; stdout is reserved for the simulation log.

use std::io;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Prefix of the daily rolling log files
const LOG_FILE_PREFIX: &str = "club-simulator.log";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for this crate when `RUST_LOG` is not set
    pub level: Level,
    /// Directory for daily rolling JSON log files, if any
    pub log_directory: Option<PathBuf>,
    /// Whether to log span open and close
    pub enable_span_events: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: Level::WARN, log_directory: None, enable_span_events: false }
    }
}

/// Keeps the background log writer alive; drop it last to flush file logs
#[derive(Debug)]
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the level from the `--verbose` and `--debug` flags
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        let config = Self::new();
        if debug {
            config.with_level(Level::DEBUG).with_span_events()
        } else if verbose {
            config.with_level(Level::INFO)
        } else {
            config
        }
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Also log to daily rolling files in `directory`
    pub fn with_file_logging(mut self, directory: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// `RUST_LOG` wins over the configured level
    fn build_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level))
        })
    }

    /// Initialize the global tracing subscriber
    pub fn init(self) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
        let console_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_span_events(self.span_events())
            .boxed();

        let (file_layer, file_guard) = match &self.log_directory {
            Some(directory) => {
                let (writer, guard) = non_blocking(rolling::daily(directory, LOG_FILE_PREFIX));
                let layer = fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_span_events(self.span_events())
                    .boxed();
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(self.build_filter())
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        info!("Logging initialized: level {}, file logging {:?}", self.level, self.log_directory);
        Ok(LoggingGuard { _file_guard: file_guard })
    }
}

/// Macro for creating structured log events with simulation context
#[macro_export]
macro_rules! sim_event {
    ($level:ident, $message:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::$level!(component = "simulation" $(, $key = $value)+, "{}", $message)
    };
    ($level:ident, $message:expr) => {
        tracing::$level!(component = "simulation", "{}", $message)
    };
}
