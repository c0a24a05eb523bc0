//! Runtime configuration, read from `GOSVG_*` environment variables.

use std::net::SocketAddr;

use gosvg_observability::LogFormat;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "GOSVG_BIND_ADDR";
pub const CREDIT_ON_SUBMIT_VAR: &str = "GOSVG_CREDIT_ON_SUBMIT";
pub const LOG_FORMAT_VAR: &str = "GOSVG_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Whether a submitted transaction also credits the driver's wallet.
    pub credit_on_submit: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            credit_on_submit: true,
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| invalid(BIND_ADDR_VAR, &bind_raw, e))?;

        let credit_on_submit = match lookup(CREDIT_ON_SUBMIT_VAR) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                invalid(CREDIT_ON_SUBMIT_VAR, &raw, "expected true/false")
            })?,
            None => true,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| invalid(LOG_FORMAT_VAR, &raw, e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            credit_on_submit,
            log_format,
        })
    }
}

fn invalid(var: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
