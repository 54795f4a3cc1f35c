//! Runtime configuration read from `TASKMANAGER_*` environment variables.

use thiserror::Error;

use crate::api::ServerConfig;

/// Variable holding the bind host.
pub const HOST_VAR: &str = "TASKMANAGER_HOST";
/// Variable holding the bind port.
pub const PORT_VAR: &str = "TASKMANAGER_PORT";
/// Variable holding the fallback tracing filter.
pub const LOG_VAR: &str = "TASKMANAGER_LOG";

const DEFAULT_LOG_FILTER: &str = "taskmanager=info,tower_http=info,warn";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value '{value}' for {variable}: {reason}")]
    InvalidValue {
        /// Name of the offending variable.
        variable: &'static str,
        /// Raw value that failed to parse.
        value: String,
        /// Parser explanation.
        reason: String,
    },

    /// A variable was set to an empty string.
    #[error("{0} must not be empty when set")]
    Empty(&'static str),
}

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listener settings.
    pub server: ServerConfig,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = non_empty(HOST_VAR, lookup(HOST_VAR))?.unwrap_or(defaults.server.host);
        let port = match non_empty(PORT_VAR, lookup(PORT_VAR))? {
            Some(raw) => parse_value(PORT_VAR, raw)?,
            None => defaults.server.port,
        };
        let log_filter = non_empty(LOG_VAR, lookup(LOG_VAR))?.unwrap_or(defaults.log_filter);

        Ok(Self {
            server: ServerConfig::new(host, port),
            log_filter,
        })
    }
}

fn non_empty(variable: &'static str, value: Option<String>) -> Result<Option<String>, ConfigError> {
    match value {
        Some(raw) if raw.trim().is_empty() => Err(ConfigError::Empty(variable)),
        Some(raw) => Ok(Some(raw.trim().to_owned())),
        None => Ok(None),
    }
}

fn parse_value<T>(variable: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|err: T::Err| ConfigError::InvalidValue {
        variable,
        reason: err.to_string(),
        value: raw,
    })
}
