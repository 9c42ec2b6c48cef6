//! Runtime configuration, read from the environment.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use prodapi_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "PRODAPI_BIND_ADDR";
pub const OPENAPI_PATH_VAR: &str = "PRODAPI_SWAGGER_PATH";
pub const LOG_FORMAT_VAR: &str = "PRODAPI_LOG_FORMAT";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_OPENAPI_PATH: &str = "templates/swagger.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PRODAPI_BIND_ADDR `{value}`: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("invalid PRODAPI_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] ParseLogFormatError),
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// OpenAPI document served at `/static/swagger.yaml`; read on every request.
    pub openapi_path: PathBuf,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            openapi_path: PathBuf::from(DEFAULT_OPENAPI_PATH),
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    /// Build the config from process environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            let parsed: Result<SocketAddr, _> = value.trim().parse();
            config.bind_addr =
                parsed.map_err(|source| ConfigError::InvalidBindAddr { value, source })?;
        }

        if let Some(path) = lookup(OPENAPI_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.openapi_path = PathBuf::from(path);
        }

        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            config.log_format = format.parse()?;
        }

        Ok(config)
    }

    /// Variables absent from `lookup`, i.e. the settings left at their defaults.
    pub fn unset_vars(lookup: impl Fn(&str) -> Option<String>) -> Vec<&'static str> {
        [BIND_ADDR_VAR, OPENAPI_PATH_VAR, LOG_FORMAT_VAR]
            .into_iter()
            .filter(|var| lookup(var).is_none())
            .collect()
    }

    pub fn with_openapi_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.openapi_path = path.into();
        self
    }
}
