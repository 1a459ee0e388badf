use std::io::{self, Write};
use log::info;
use thiserror::Error;
use crate::config::Config;
use crate::initialization::Mgr;
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::{extract_records, parse_document};
use crate::presenter::present;

/// Runs the forecast pipeline once: fetch, parse, extract and present.
/// Nothing is written to `out` unless all steps before presenting succeeded.
///
/// # Arguments
///
/// * 'config' - configuration
/// * 'mgr' - struct with configured managers
/// * 'out' - sink for the forecast text
pub fn run<W: Write>(config: &Config, mgr: &Mgr, out: &mut W) -> Result<(), WorkerError> {
    let body = mgr.forecast.fetch()?;
    let document = parse_document(&body)?;
    let records = extract_records(&document, config.forecast.max_entries)?;

    info!("presenting {} forecast entries for {}", records.len(), config.location.name);
    present(out, &config.header(), &records)?;

    Ok(())
}

/// Error depicting errors that occur during a forecast run
///
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("{0}")]
    ForecastError(#[from] ForecastError),
    #[error("OutputError: {0}")]
    OutputError(#[from] io::Error),
}
