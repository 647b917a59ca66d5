//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures while assembling a [`NavConfig`](crate::config::NavConfig).
///
/// The navigation state machines themselves never fail; only loading
/// configuration from files and the environment can.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Duration override did not parse
    #[error("invalid duration '{value}' for {key}")]
    InvalidDuration {
        key: String,
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    /// Numeric override did not parse
    #[error("invalid numeric value '{value}' for {key}")]
    InvalidNumber { key: String, value: String },

    /// A value is outside its allowed range
    #[error("config guard rail violated: {0}")]
    GuardRail(String),

    /// `.env` file could not be loaded
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

/// Unknown section name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section '{0}'")]
pub struct ParseSectionError(pub String);

/// Result alias for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
