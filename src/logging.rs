use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up the global logger
///
/// # Arguments
///
/// * 'log_path' - file to append log records to, if any
/// * 'log_level' - maximum level to log
/// * 'log_to_stderr' - whether log records also should go to stderr
pub fn setup_logger(log_path: Option<&str>, log_level: LevelFilter, log_to_stderr: bool) -> Result<(), LoggerError> {
    let config = logger_config(log_path, log_level, log_to_stderr)?;
    log4rs::init_config(config)?;

    Ok(())
}

/// Builds the log4rs configuration used by the logger
///
/// # Arguments
///
/// * 'log_path' - file to append log records to, if any
/// * 'log_level' - maximum level to log
/// * 'log_to_stderr' - whether log records also should go to stderr
fn logger_config(log_path: Option<&str>, log_level: LevelFilter, log_to_stderr: bool) -> Result<Config, LoggerError> {
    let mut builder = Config::builder();
    let mut root = Root::builder();

    if let Some(path) = log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)
            .map_err(|e| LoggerError::FileAppender(format!("{}: {}", path, e)))?;

        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    // Never stdout, that stream belongs to the forecast output
    if log_to_stderr {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();

        builder = builder.appender(Appender::builder().build("stderr", Box::new(stderr)));
        root = root.appender("stderr");
    }

    let config = builder.build(root.build(log_level))
        .map_err(|e| LoggerError::Config(e.to_string()))?;

    Ok(config)
}

/// Error depicting errors that occur while setting up the logger
///
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("FileAppenderError: {0}")]
    FileAppender(String),
    #[error("ConfigError: {0}")]
    Config(String),
    #[error("SetLoggerError: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
