//! Main simulation orchestrator
//!
//! This module contains the SimulationOrchestrator, which ties a run together:
//! read the input file, parse and validate it, replay the day through the
//! [`ClubEngine`] and write the result in the requested format.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::events::ClubInput;
use crate::sim_event;
use crate::simulation::{ClubEngine, SimulationError, SimulationLog, SimulationResult};
use crate::types::{ReportFormat, RunSettings};

/// Coordinates loading, simulating and writing one day
#[derive(Debug)]
pub struct SimulationOrchestrator {
    settings: RunSettings,
    format: ReportFormat,
}

impl SimulationOrchestrator {
    /// Create a new simulation orchestrator
    #[instrument(skip(settings), fields(input = %settings.input.display()))]
    pub fn new(settings: RunSettings) -> SimulationResult<Self> {
        settings.validate().map_err(SimulationError::settings_error)?;
        let format = settings.report_format().map_err(SimulationError::settings_error)?;

        info!("Initializing simulation orchestrator, {} output", format);
        Ok(Self { settings, format })
    }

    /// Settings the orchestrator was created with
    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Output format of the run
    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Read, parse and validate the input file
    #[instrument(skip(self))]
    pub fn load_input(&self) -> SimulationResult<ClubInput> {
        let text = fs::read_to_string(&self.settings.input)?;
        let input = ClubInput::parse(&text)?;
        input.config.validate()?;

        sim_event!(
            info,
            "Input loaded",
            tables = input.config.table_count,
            events = input.events.len(),
        );
        Ok(input)
    }

    /// Load the input and replay the day
    #[instrument(skip(self))]
    pub fn run(&self) -> SimulationResult<SimulationLog> {
        let input = self.load_input()?;
        let log = ClubEngine::new(input.config).process(input.events);

        sim_event!(
            info,
            "Simulation finished",
            lines = log.lines.len(),
            revenue = log.statistics.total_revenue,
        );
        Ok(log)
    }

    /// Render the log in the configured format
    pub fn render(&self, log: &SimulationLog) -> SimulationResult<String> {
        match self.format {
            ReportFormat::Text => Ok(log.render_text()),
            ReportFormat::Json => {
                let mut json = log.to_json()?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// Write the log to the output file, or stdout when none is set
    #[instrument(skip(self, log))]
    pub fn write_output(&self, log: &SimulationLog) -> SimulationResult<()> {
        let rendered = self.render(log)?;

        match &self.settings.output {
            Some(path) => write_file(path, &rendered)?,
            None => {
                let stdout = io::stdout();
                let mut writer = BufWriter::new(stdout.lock());
                writer.write_all(rendered.as_bytes())?;
                writer.flush()?;
            }
        }

        debug!("Wrote {} bytes of {} output", rendered.len(), self.format);
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    info!("Simulation log written to {}", path.display());
    Ok(())
}
