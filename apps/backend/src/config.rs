//! Centralized application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Minimum acceptable secret length, in bytes.
const MIN_JWT_SECRET_LEN: usize = 32;

/// Default access-token lifetime in seconds (24 hours).
const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Security configuration
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

impl Config {
    /// Load and validate all configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_str = env::var("BACKEND_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let jwt_secret = env::var("BACKEND_JWT_SECRET")
            .map_err(|_| AppError::config("BACKEND_JWT_SECRET must be set".to_string()))?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(AppError::config(format!(
                "BACKEND_JWT_SECRET is too short. It should be at least {MIN_JWT_SECRET_LEN} characters for security."
            )));
        }

        let ttl_str =
            env::var("TOKEN_TTL_SECS").unwrap_or_else(|_| DEFAULT_TOKEN_TTL_SECS.to_string());
        let ttl_secs = ttl_str.parse::<u64>().map_err(|_| {
            AppError::config(format!(
                "TOKEN_TTL_SECS must be a positive number of seconds, got '{ttl_str}'"
            ))
        })?;
        if ttl_secs == 0 {
            return Err(AppError::config(
                "TOKEN_TTL_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(Config {
            host,
            port,
            jwt_secret,
            token_ttl: Duration::from_secs(ttl_secs),
        })
    }
}
