use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::domain::DEFAULT_PRINCIPAL;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "BankInterestCalculator";
const APP_NAME: &str = "BankInterestCalculator";

static ACTIVE: OnceLock<AppConfig> = OnceLock::new();

/// Read-only startup settings. Nothing is ever written back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_principal")]
    pub default_principal: f64,
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins over it.
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_principal() -> f64 {
    DEFAULT_PRINCIPAL
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_principal: DEFAULT_PRINCIPAL,
            log_filter: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(data)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !self.default_principal.is_finite() || self.default_principal < 0.0 {
            return Err(ConfigError::InvalidDefaultPrincipal(self.default_principal));
        }
        Ok(self)
    }
}

pub fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Missing file means defaults.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_file().ok_or(ConfigError::StorageUnavailable)?;
    match fs::read_to_string(&path) {
        Ok(data) => AppConfig::from_json(&data),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(err) => Err(err.into()),
    }
}

/// Make `config` the process-wide configuration. The first call wins.
pub fn install(config: AppConfig) -> &'static AppConfig {
    ACTIVE.get_or_init(|| config)
}

pub fn active() -> &'static AppConfig {
    ACTIVE.get_or_init(AppConfig::default)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config directory unavailable")]
    StorageUnavailable,
    #[error("default_principal must be a finite non-negative amount, got {0}")]
    InvalidDefaultPrincipal(f64),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_principal, 100_000.0);
    }

    #[test]
    fn test_full_config() {
        let config =
            AppConfig::from_json(r#"{ "default_principal": 2500.5, "log_filter": "debug" }"#)
                .unwrap();
        assert_eq!(config.default_principal, 2500.5);
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_negative_principal_rejected() {
        let err = AppConfig::from_json(r#"{ "default_principal": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDefaultPrincipal(v) if v == -1.0));
    }

    #[test]
    fn test_malformed_json() {
        let err = AppConfig::from_json("{ default_principal: ").unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }

    #[test]
    fn test_wrong_type() {
        let err = AppConfig::from_json(r#"{ "default_principal": "lots" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }
}
