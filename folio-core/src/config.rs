//! Runtime configuration for navigation and scroll tracking
//!
//! [`NavConfig`] holds `Option<T>` overrides for the compiled constants in
//! [`crate::constants`]. Accessor methods fall back to the constants when a
//! field is `None`.
//!
//! Sources are layered by [`ConfigLoader`], later ones winning:
//! compiled defaults, a TOML file, a `.env` file, then `FOLIO_*` process
//! environment variables.

use crate::constants::{restoration, scroll_spy, viewport};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides `compact_max_width_px`.
pub const ENV_COMPACT_MAX_WIDTH_PX: &str = "FOLIO_COMPACT_MAX_WIDTH_PX";
/// Overrides `activation_line_px`.
pub const ENV_ACTIVATION_LINE_PX: &str = "FOLIO_ACTIVATION_LINE_PX";
/// Overrides `resize_debounce`.
pub const ENV_RESIZE_DEBOUNCE: &str = "FOLIO_RESIZE_DEBOUNCE";
/// Overrides `restore_settle`.
pub const ENV_RESTORE_SETTLE: &str = "FOLIO_RESTORE_SETTLE";

/// Optional overrides. Fields are `None` by default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Widest viewport still classified compact (inclusive)
    pub compact_max_width_px: Option<u32>,
    /// Activation line distance from the viewport top
    pub activation_line_px: Option<f32>,
    /// Resize debounce window, e.g. `"100ms"`
    #[serde(with = "humantime_opt")]
    pub resize_debounce: Option<Duration>,
    /// Delay before a restoration scroll, e.g. `"100ms"`
    #[serde(with = "humantime_opt")]
    pub restore_settle: Option<Duration>,
}

impl NavConfig {
    /// Empty overrides; every accessor returns its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&raw)
    }

    /// Apply `FOLIO_*` overrides from `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_COMPACT_MAX_WIDTH_PX) {
            self.compact_max_width_px =
                Some(parse_number(ENV_COMPACT_MAX_WIDTH_PX, &raw)?);
        }
        if let Some(raw) = lookup(ENV_ACTIVATION_LINE_PX) {
            self.activation_line_px =
                Some(parse_number(ENV_ACTIVATION_LINE_PX, &raw)?);
        }
        if let Some(raw) = lookup(ENV_RESIZE_DEBOUNCE) {
            self.resize_debounce =
                Some(parse_duration(ENV_RESIZE_DEBOUNCE, &raw)?);
        }
        if let Some(raw) = lookup(ENV_RESTORE_SETTLE) {
            self.restore_settle = Some(parse_duration(ENV_RESTORE_SETTLE, &raw)?);
        }
        Ok(())
    }

    /// Reject values that would break classification or timing.
    pub fn validate(&self) -> Result<()> {
        if self.compact_max_width_px() == 0 {
            return Err(ConfigError::GuardRail(
                "compact_max_width_px must be greater than zero".into(),
            ));
        }
        let line = self.activation_line_px();
        if !line.is_finite() || line < 0.0 {
            return Err(ConfigError::GuardRail(format!(
                "activation_line_px must be a non-negative number, got {line}"
            )));
        }
        if self.resize_debounce().is_zero() {
            return Err(ConfigError::GuardRail(
                "resize_debounce must be non-zero".into(),
            ));
        }
        Ok(())
    }

    // ========== ACCESSORS ==========

    /// Breakpoint, compact at or below.
    pub fn compact_max_width_px(&self) -> u32 {
        self.compact_max_width_px
            .unwrap_or(viewport::COMPACT_MAX_WIDTH_PX)
    }

    /// Activation line offset from the viewport top.
    pub fn activation_line_px(&self) -> f32 {
        self.activation_line_px
            .unwrap_or(scroll_spy::ACTIVATION_LINE_PX)
    }

    /// Trailing debounce for resize events.
    pub fn resize_debounce(&self) -> Duration {
        self.resize_debounce
            .unwrap_or(Duration::from_millis(viewport::RESIZE_DEBOUNCE_MS))
    }

    /// Delay before a pending restoration scrolls.
    pub fn restore_settle(&self) -> Duration {
        self.restore_settle
            .unwrap_or(Duration::from_millis(restoration::SETTLE_DELAY_MS))
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: raw.to_string(),
        })
}

fn parse_duration(key: &str, raw: &str) -> Result<Duration> {
    humantime::parse_duration(raw.trim()).map_err(|source| {
        ConfigError::InvalidDuration {
            key: key.to_string(),
            value: raw.to_string(),
            source,
        }
    })
}

/// Serde adapter for `Option<Duration>` written as humantime strings.
mod humantime_opt {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => serializer
                .serialize_str(&humantime::format_duration(*duration).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| humantime::parse_duration(&s).map_err(de::Error::custom))
            .transpose()
    }
}

/// Layers the configuration sources.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader with no file sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from a TOML file.
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Read environment overrides from a dotenv file.
    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Load using the process environment.
    pub fn load(&self) -> Result<NavConfig> {
        self.load_with(|key| std::env::var(key).ok())
    }

    /// Load with an explicit environment lookup. Values from `lookup` take
    /// precedence over the `.env` file.
    pub fn load_with<F>(&self, lookup: F) -> Result<NavConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config_path {
            Some(path) => NavConfig::load(path)?,
            None => NavConfig::default(),
        };

        let file_env = match &self.env_file {
            Some(path) => read_env_file(path)?,
            None => HashMap::new(),
        };

        config.apply_env(|key| {
            lookup(key).or_else(|| file_env.get(key).cloned())
        })?;
        config.validate()?;

        tracing::debug!(?config, "navigation config loaded");
        Ok(config)
    }
}

/// `FOLIO_*` entries of a dotenv file. A missing file yields no entries.
fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "env file not found; skipping");
        return Ok(HashMap::new());
    }

    let mut vars = HashMap::new();
    for entry in dotenvy::from_path_iter(path)? {
        let (key, value) = entry?;
        if key.starts_with("FOLIO_") {
            vars.insert(key, value);
        }
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_fall_back_to_constants() {
        let config = NavConfig::default();
        assert_eq!(config.compact_max_width_px(), 768);
        assert_eq!(config.activation_line_px(), 100.0);
        assert_eq!(config.resize_debounce(), Duration::from_millis(100));
        assert_eq!(config.restore_settle(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_overrides_with_humantime_durations() {
        let config = NavConfig::from_toml_str(
            r#"
            compact_max_width_px = 640
            resize_debounce = "250ms"
            "#,
        )
        .expect("parse");

        assert_eq!(config.compact_max_width_px(), 640);
        assert_eq!(config.resize_debounce(), Duration::from_millis(250));
        assert_eq!(config.activation_line_px(), 100.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = NavConfig::from_toml_str("breakpoint = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn env_lookup_overrides() {
        let mut config = NavConfig::default();
        config
            .apply_env(|key| match key {
                ENV_ACTIVATION_LINE_PX => Some("72.5".into()),
                ENV_RESTORE_SETTLE => Some("1s".into()),
                _ => None,
            })
            .expect("apply");

        assert_eq!(config.activation_line_px(), 72.5);
        assert_eq!(config.restore_settle(), Duration::from_secs(1));
    }

    #[test]
    fn malformed_env_values_are_reported() {
        let mut config = NavConfig::default();
        let err = config
            .apply_env(|key| {
                (key == ENV_COMPACT_MAX_WIDTH_PX).then(|| "wide".to_string())
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));

        let err = config
            .apply_env(|key| {
                (key == ENV_RESIZE_DEBOUNCE).then(|| "soon".to_string())
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDuration { .. }));
    }

    #[test]
    fn guard_rails() {
        let zero_width = NavConfig {
            compact_max_width_px: Some(0),
            ..NavConfig::default()
        };
        assert!(matches!(
            zero_width.validate(),
            Err(ConfigError::GuardRail(_))
        ));

        let negative_line = NavConfig {
            activation_line_px: Some(-1.0),
            ..NavConfig::default()
        };
        assert!(negative_line.validate().is_err());

        let zero_debounce = NavConfig {
            resize_debounce: Some(Duration::ZERO),
            ..NavConfig::default()
        };
        assert!(zero_debounce.validate().is_err());
    }

    #[test]
    fn loader_without_sources_yields_defaults() {
        let config = ConfigLoader::new().load_with(no_env).expect("load");
        assert_eq!(config, NavConfig::default());
    }
}
