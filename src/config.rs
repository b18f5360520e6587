use crate::*;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};


#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
/// Dynamic configuration read on demand by expirybot. All fields are optional.
pub struct Config {
    /// Log filter (tracing env-filter syntax, ex. "debug" or "expirybot=trace")
    pub log_level: Option<String>,

    /// Threshold used for domains without their own (positive) threshold
    pub default_threshold: Option<i64>,

    /// Maximum number of concurrent domain checks
    pub max_concurrent_checks: Option<usize>,

    /// DNS lookup and TLS dial timeout, in seconds
    pub check_timeout: Option<u64>,
}


/// Engine settings resolved from Config and defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Threshold used for domains with a non-positive threshold
    pub default_threshold: i64,

    /// Number of checker threads
    pub max_concurrent_checks: usize,

    /// Timeout for each network phase of a check
    pub check_timeout: Duration,
}


impl Default for Settings {
    fn default() -> Settings {
        Settings {
            default_threshold: DEFAULT_THRESHOLD,
            max_concurrent_checks: MAX_CONCURRENT_CHECKS,
            check_timeout: Duration::from_secs(CHECK_TIMEOUT),
        }
    }
}


impl Config {
    /// Load expirybot settings file from the config directory.
    /// Missing file (or config directory) gives defaults.
    pub fn load() -> Result<Config, ExpiryError> {
        match settings_file_path() {
            Ok(path) => Config::load_from(&path),
            Err(err) => {
                debug!("No settings file location: {}", err);
                Ok(Config::default())
            }
        }
    }


    /// Load settings from given JSON file. Missing file gives defaults.
    pub fn load_from(path: &Path) -> Result<Config, ExpiryError> {
        if !path.exists() {
            trace!("No settings file: {}", path.display());
            return Ok(Config::default());
        }
        let contents = read_text_file(path).map_err(|err| ExpiryError::io(path, err))?;
        serde_json::from_str(&contents).map_err(|source| {
            ExpiryError::Settings {
                path: path.to_path_buf(),
                source,
            }
        })
    }


    /// Parse settings JSON
    pub fn parse(contents: &str) -> Result<Config, ExpiryError> {
        Ok(serde_json::from_str(contents)?)
    }


    /// Log filter directive
    pub fn get_log_level(&self) -> String {
        self.log_level
            .clone()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }


    /// Resolve engine settings, non-positive values fall back to defaults
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            default_threshold: self
                .default_threshold
                .filter(|threshold| *threshold > 0)
                .unwrap_or(defaults.default_threshold),
            max_concurrent_checks: self
                .max_concurrent_checks
                .filter(|max| *max > 0)
                .unwrap_or(defaults.max_concurrent_checks),
            check_timeout: self
                .check_timeout
                .filter(|timeout| *timeout > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.check_timeout),
        }
    }
}
