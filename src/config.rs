use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::constants::{
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_OUTPUT_PATH, DEFAULT_PROFILE_HOSTS, DEFAULT_TARGET_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Check configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Target
    pub target_url: String,
    pub timeout: Duration,

    // Request headers
    pub user_agent: String,
    pub accept_language: String,

    // Profile detection
    pub profile_hosts: Vec<String>,

    // Output
    pub output_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Target
            target_url: Self::target_url_from_env(),
            timeout: Duration::from_secs(parse_env_u64("TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?),

            // Request headers
            user_agent: env_or_default("USER_AGENT", DEFAULT_USER_AGENT),
            accept_language: env_or_default("ACCEPT_LANGUAGE", DEFAULT_ACCEPT_LANGUAGE),

            // Profile detection
            profile_hosts: parse_host_list(&env_or_default("PROFILE_HOSTS", DEFAULT_PROFILE_HOSTS)),

            // Output
            output_path: Self::output_path_from_env(),
        })
    }

    /// Load and validate configuration in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Target URL as configured, without parsing anything else.
    ///
    /// Lets a failed configuration still be reported against its target.
    #[must_use]
    pub fn target_url_from_env() -> String {
        env_or_default("TARGET_URL", DEFAULT_TARGET_URL)
    }

    /// Output path as configured, without parsing anything else.
    #[must_use]
    pub fn output_path_from_env() -> PathBuf {
        PathBuf::from(env_or_default("OUTPUT_PATH", DEFAULT_OUTPUT_PATH))
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "TARGET_URL".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "OUTPUT_PATH".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "USER_AGENT".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Defaults for tests, independent of the process environment.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            timeout: Duration::from_secs(5),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            profile_hosts: parse_host_list(DEFAULT_PROFILE_HOSTS),
            output_path: PathBuf::from("status.json"),
        }
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.trim().parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_host_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .filter(|h| !h.is_empty())
        .collect()
}
