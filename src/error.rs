use std::{io, path::PathBuf};
use thiserror::Error;


#[derive(Debug, Error)]
/// Orchestration failures: anything that stops expirybot before or around the checks
pub enum ExpiryError {
    /// Neither XDG_CONFIG_HOME nor HOME are defined
    #[error("Error getting home directory: neither XDG_CONFIG_HOME nor HOME is set")]
    NoHomeDirectory,

    /// Domain list or settings file I/O failure
    #[error("{path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,

        /// Cause
        #[source]
        source: io::Error,
    },

    /// Settings file is not valid JSON for Config
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Settings file is not valid JSON for Config
    #[error("Configuration error: {source} in file: {}", .path.display())]
    Settings {
        /// Settings file
        path: PathBuf,

        /// Cause
        #[source]
        source: serde_json::Error,
    },

    /// Domain entry without a domain name
    #[error("Invalid domain entry: '{0}'")]
    InvalidDomain(String),
}


impl ExpiryError {
    /// Wrap an io::Error with the path it relates to
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> ExpiryError {
        ExpiryError::Io {
            path: path.into(),
            source,
        }
    }
}
