pub mod errors;
mod models;

use std::time::Duration;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use crate::config::Config;
use crate::models::DisplayRecord;
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::models::{ForecastDocument, ForecastEntry, Parameter};

const TEMPERATURE: &str = "t";
const PRECIPITATION: &str = "pmean";

/// Struct for fetching point forecasts from SMHI open data
pub struct Forecast {
    client: Client,
    url: String,
}

impl Forecast {
    /// Returns a forecast struct ready for fetching the configured location
    ///
    /// # Arguments
    ///
    /// * 'config' - configuration to use
    pub fn new(config: &Config) -> Result<Forecast, ForecastError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.forecast.timeout_secs))
            .user_agent(config.forecast.user_agent.clone())
            .build()?;

        let url = format!("{}/api/category/pmp3g/version/2/geotype/point/lon/{}/lat/{}/data.json",
                          config.forecast.host.trim_end_matches('/'),
                          config.location.lon,
                          config.location.lat);

        Ok(Forecast { client, url })
    }

    /// Retrieves the raw forecast document as text
    ///
    pub fn fetch(&self) -> Result<String, ForecastError> {
        info!("fetching forecast from {}", self.url);

        let response = self.client
            .get(&self.url)
            .send()?
            .error_for_status()?;

        let body = response.text()?;
        debug!("received {} bytes", body.len());

        Ok(body)
    }
}

/// Parses forecast text into a generic json document
///
/// # Arguments
///
/// * 'body' - text as received from the forecast service
pub fn parse_document(body: &str) -> Result<Value, ForecastError> {
    let document: Value = serde_json::from_str(body)?;

    Ok(document)
}

/// Extracts display records from the first entries of a forecast document
/// Entries past `max_entries` are neither checked nor returned.
///
/// # Arguments
///
/// * 'document' - parsed forecast document
/// * 'max_entries' - maximum number of records to return
pub fn extract_records(document: &Value, max_entries: usize) -> Result<Vec<DisplayRecord>, ForecastError> {
    let document = ForecastDocument::deserialize(document)
        .map_err(|e| ForecastError::SchemaError(format!("document: {}", e)))?;

    log_issue_time("approved", document.approved_time.as_deref());
    log_issue_time("reference", document.reference_time.as_deref());

    document.time_series
        .iter()
        .take(max_entries)
        .enumerate()
        .map(|(i, v)| {
            let entry = ForecastEntry::deserialize(v)
                .map_err(|e| ForecastError::SchemaError(format!("timeSeries[{}]: {}", i, e)))?;
            to_record(i, entry)
        })
        .collect()
}

/// Reduces one forecast entry to a display record.
/// The last occurrence of a repeated parameter wins, absent ones default to zero.
///
/// # Arguments
///
/// * 'index' - position of the entry in the time series
/// * 'entry' - the forecast entry
fn to_record(index: usize, entry: ForecastEntry) -> Result<DisplayRecord, ForecastError> {
    let mut temperature = 0.0;
    let mut precipitation = 0.0;

    for p in entry.parameters.iter() {
        match p.name.as_str() {
            TEMPERATURE => temperature = first_value(index, p)?,
            PRECIPITATION => precipitation = first_value(index, p)?,
            _ => {}
        }
    }

    debug!("{}: t {}, pmean {}", entry.valid_time, temperature, precipitation);

    Ok(DisplayRecord {
        timestamp: entry.valid_time,
        temperature,
        precipitation,
    })
}

/// Returns the first value of a parameter, which must be a number
///
/// # Arguments
///
/// * 'index' - position of the entry in the time series
/// * 'parameter' - the parameter to read
fn first_value(index: usize, parameter: &Parameter) -> Result<f64, ForecastError> {
    parameter.values
        .as_array()
        .and_then(|v| v.first())
        .and_then(Value::as_f64)
        .ok_or_else(|| ForecastError::SchemaError(
            format!("timeSeries[{}]: parameter '{}' has no numeric first value", index, parameter.name)))
}

/// Logs a document issue time if it is present and readable
///
/// # Arguments
///
/// * 'label' - which issue time this is
/// * 'time' - the time as given in the document
fn log_issue_time(label: &str, time: Option<&str>) {
    if let Some(time) = time {
        match time.parse::<DateTime<Utc>>() {
            Ok(t) => info!("forecast {} time: {}", label, t),
            Err(e) => warn!("unreadable forecast {} time '{}': {}", label, time, e),
        }
    }
}
