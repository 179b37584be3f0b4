//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub detection: DetectionConfig,
    pub logging: LoggingConfig,
}

/// Secret detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Remote classifier endpoint URL; absence disables the remote path
    pub remote_endpoint: Option<String>,
    /// Application identifier sent with each classification request;
    /// absence disables the remote path
    pub remote_app_id: Option<String>,
    /// Hard timeout for a single classification request (in seconds)
    pub remote_timeout_seconds: u64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            remote_endpoint: None,
            remote_app_id: None,
            remote_timeout_seconds: 10,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

impl Validate for DetectionConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.remote_timeout_seconds == 0 {
            return Err(ValidationError::detection(
                "remote_timeout_seconds must be > 0",
            ));
        }
        if let Some(ref endpoint) = self.remote_endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::detection(
                    "remote_endpoint must be an http(s) URL",
                ));
            }
        }
        if let Some(ref app_id) = self.remote_app_id {
            if app_id.trim().is_empty() {
                return Err(ValidationError::detection(
                    "remote_app_id must not be blank",
                ));
            }
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ValidationError::logging(format!(
                    "Unknown log level: {}",
                    other
                )));
            }
        }
        Ok(())
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.detection.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Add local config and environment variables last (highest priority)
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("DOCGUARD").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_remote_path() {
        let config = DetectionConfig::default();
        assert!(config.remote_endpoint.is_none());
        assert!(config.remote_app_id.is_none());
        assert_eq!(config.remote_timeout_seconds, 10);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = DetectionConfig {
            remote_timeout_seconds: 0,
            ..DetectionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let config = DetectionConfig {
            remote_endpoint: Some("ftp://classifier.internal".to_string()),
            ..DetectionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_app_id_is_rejected() {
        let config = DetectionConfig {
            remote_app_id: Some("   ".to_string()),
            ..DetectionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let config = LoggingConfig {
            level: "verbose".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
