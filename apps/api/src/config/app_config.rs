//! Application configuration loaded once from environment variables.
//!
//! `main` builds an `AppConfig`, derives `AppState` from it, and nothing else
//! reads the process environment afterwards.

use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Placeholder signing secret used when `JWT_SECRET` is not set.
///
/// Publicly known; any real deployment must override it.
pub const DEFAULT_JWT_SECRET: &str = "dev_secret_change_me";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);
/// Longest accepted `JWT_EXPIRES_IN_SECS` (one year)
pub const MAX_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);
pub const DEFAULT_MAX_JSON_PAYLOAD_SIZE: usize = 1024 * 1024;

/// Immutable process configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Server
    pub host: String,
    pub port: u16,

    // Security
    pub jwt_secret: String,
    pub access_token_ttl: Duration,

    // HTTP
    /// Empty means every origin is reflected.
    pub cors_allowed_origins: Vec<String>,
    pub max_json_payload_size: usize,
}

impl AppConfig {
    /// Load and validate configuration from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("PORT must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) if secret.is_empty() => {
                return Err(AppError::config("JWT_SECRET must not be empty"));
            }
            Some(secret) => secret,
            None => DEFAULT_JWT_SECRET.to_string(),
        };

        let access_token_ttl = match lookup("JWT_EXPIRES_IN_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 && secs <= MAX_ACCESS_TOKEN_TTL.as_secs() => {
                    Duration::from_secs(secs)
                }
                _ => {
                    return Err(AppError::config(format!(
                        "JWT_EXPIRES_IN_SECS must be an integer between 1 and {}, got '{raw}'",
                        MAX_ACCESS_TOKEN_TTL.as_secs()
                    )))
                }
            },
            None => DEFAULT_ACCESS_TOKEN_TTL,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        let max_json_payload_size = lookup("MAX_JSON_PAYLOAD_SIZE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_JSON_PAYLOAD_SIZE);

        Ok(AppConfig {
            host,
            port,
            jwt_secret,
            access_token_ttl,
            cors_allowed_origins,
            max_json_payload_size,
        })
    }

    /// True when tokens are signed with the well-known placeholder secret.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

/// Parse a comma-separated origin list, keeping only `http(s)://` entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect()
}
