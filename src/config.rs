use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use anyhow::{bail, Context, Result};

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            name: "Karlskrona".into(),
            lat: 56.1612,
            lon: 15.5869,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ForecastParameters {
    pub host: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub max_entries: usize,
}

impl Default for ForecastParameters {
    fn default() -> Self {
        Self {
            host: "https://opendata-download-metfcst.smhi.se".into(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            max_entries: 8,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stderr: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LevelFilter::Info,
            log_to_stderr: false,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub location: Location,
    pub forecast: ForecastParameters,
    pub general: General,
}

impl Config {
    /// Returns the header line printed ahead of the forecast entries
    pub fn header(&self) -> String {
        format!("{} väder idag:", self.location.name)
    }
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config> {
    let toml = fs::read_to_string(config_path)
        .with_context(|| format!("reading config file {}", config_path))?;
    let config: Config = toml::from_str(&toml)
        .with_context(|| format!("parsing config file {}", config_path))?;
    check_config(&config)
        .with_context(|| format!("checking config file {}", config_path))?;

    Ok(config)
}

/// Rejects configuration values that would make every run fail
///
/// # Arguments
///
/// * 'config' - the configuration to check
fn check_config(config: &Config) -> Result<()> {
    if config.forecast.timeout_secs == 0 {
        bail!("forecast.timeout_secs must be greater than zero");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_karlskrona() {
        let config = Config::default();

        assert_eq!(config.location.name, "Karlskrona");
        assert_eq!(config.location.lon, 15.5869);
        assert_eq!(config.location.lat, 56.1612);
        assert_eq!(config.forecast.max_entries, 8);
        assert_eq!(config.forecast.timeout_secs, 30);
        assert_eq!(config.header(), "Karlskrona väder idag:");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let toml = r#"
            [location]
            name = "Visby"
            lat = 57.6348
            lon = 18.2948

            [general]
            log_level = "debug"
        "#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.location.name, "Visby");
        assert_eq!(config.location.lat, 57.6348);
        assert_eq!(config.forecast.host, "https://opendata-download-metfcst.smhi.se");
        assert_eq!(config.forecast.max_entries, 8);
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert!(config.general.log_path.is_none());
        assert_eq!(config.header(), "Visby väder idag:");
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.location.name, "Karlskrona");
        assert!(!config.general.log_to_stderr);
    }

    #[test]
    fn missing_file_is_an_error() {
        let res = load_config("/nonexistent/smhi_forecast.toml");

        assert!(res.is_err());
        assert!(res.unwrap_err().to_string().contains("/nonexistent/smhi_forecast.toml"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let path = std::env::temp_dir().join("smhi_forecast_zero_timeout.toml");
        fs::write(&path, "[forecast]\ntimeout_secs = 0\n").unwrap();

        let res = load_config(path.to_str().unwrap());

        let err = res.unwrap_err();
        assert!(format!("{:#}", err).contains("timeout_secs must be greater than zero"));
    }

    #[test]
    fn positive_timeout_is_accepted() {
        let path = std::env::temp_dir().join("smhi_forecast_short_timeout.toml");
        fs::write(&path, "[forecast]\ntimeout_secs = 5\n").unwrap();

        let config = load_config(path.to_str().unwrap()).unwrap();

        assert_eq!(config.forecast.timeout_secs, 5);
    }

    #[test]
    fn mistyped_value_is_an_error() {
        let res: Result<Config, _> = toml::from_str("[forecast]\nmax_entries = \"eight\"\n");

        assert!(res.is_err());
    }
}
