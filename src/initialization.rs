use std::env;
use log::info;
use thiserror::Error;
use crate::config::{load_config, Config};
use crate::logging::{setup_logger, LoggerError};
use crate::manager_forecast::Forecast;
use crate::manager_forecast::errors::ForecastError;

pub struct Mgr {
    pub forecast: Forecast,
}

/// Initializes and returns configuration and a Mgr struct holding initialized managers
/// Configuration is read from `--config=<path>` if given, otherwise defaults are used.
///
pub fn init() -> Result<(Config, Mgr), InitializationError> {
    let args: Vec<String> = env::args().collect();
    let config = match config_path(&args) {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    // Setup logging
    setup_logger(config.general.log_path.as_deref(), config.general.log_level, config.general.log_to_stderr)?;

    // Print version
    info!("starting smhi forecast version: {}", env!("CARGO_PKG_VERSION"));

    let forecast = Forecast::new(&config)?;

    Ok((config, Mgr { forecast }))
}

/// Returns the path given by a `--config=<path>` argument, if any
///
/// # Arguments
///
/// * 'args' - command line arguments
fn config_path(args: &[String]) -> Option<&str> {
    args.iter()
        .find_map(|a| a.strip_prefix("--config="))
}

/// Error depicting errors that occur while initializing
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ConfigurationError: {0:#}")]
    ConfigurationError(#[from] anyhow::Error),
    #[error("SetupLoggerError: {0}")]
    SetupLoggerError(#[from] LoggerError),
    #[error("ForecastSetupError: {0}")]
    ForecastSetupError(#[from] ForecastError),
}
