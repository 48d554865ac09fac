use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Deadline applied to every store-bound request.
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let request_timeout = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(value) => Duration::from_secs(parse_timeout_secs(&value)?),
            Err(_) => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            request_timeout,
        })
    }
}

fn parse_timeout_secs(value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "REQUEST_TIMEOUT_SECS".to_string(),
        value: value.to_string(),
        reason,
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("timeout must be at least one second".to_string())),
        Ok(secs) => Ok(secs),
        Err(e) => Err(invalid(e.to_string())),
    }
}
