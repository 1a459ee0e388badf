use serde::Deserialize;
use serde_json::Value;

/// Root of a point forecast document.
/// Entries are kept untyped so only the ones actually consumed are schema checked.
#[derive(Deserialize, Debug)]
pub struct ForecastDocument {
    #[serde(rename = "approvedTime", default)]
    pub approved_time: Option<String>,
    #[serde(rename = "referenceTime", default)]
    pub reference_time: Option<String>,
    #[serde(rename = "timeSeries")]
    pub time_series: Vec<Value>,
}

#[derive(Deserialize, Debug)]
pub struct ForecastEntry {
    #[serde(rename = "validTime")]
    pub valid_time: String,
    pub parameters: Vec<Parameter>,
}

#[derive(Deserialize, Debug)]
pub struct Parameter {
    pub name: String,
    /// Left untyped, only the wanted parameters need an array of numbers
    #[serde(default)]
    pub values: Value,
}
