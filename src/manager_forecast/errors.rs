use thiserror::Error;

/// Error depicting errors that occur while fetching and reading a forecast
///
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("NetworkError: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("ParseError: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("SchemaError: {0}")]
    SchemaError(String),
}
