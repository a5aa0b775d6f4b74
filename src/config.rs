// src/config.rs
use crate::application::context::RequestContext;
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    query_timeout: Duration,
    command_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite::memory:".into()
}

const DEFAULT_QUERY_TIMEOUT_MS: u64 = 2_000;
const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 5_000;

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let query_timeout = millis(&lookup, "QUERY_TIMEOUT_MS", DEFAULT_QUERY_TIMEOUT_MS)?;
        let command_timeout = millis(&lookup, "COMMAND_TIMEOUT_MS", DEFAULT_COMMAND_TIMEOUT_MS)?;

        Ok(Self {
            database_url,
            query_timeout,
            command_timeout,
        })
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    #[must_use]
    pub const fn command_timeout(&self) -> Duration {
        self.command_timeout
    }

    /// Context for read operations (fetch, lookups).
    #[must_use]
    pub fn query_context(&self) -> RequestContext {
        RequestContext::new(self.query_timeout)
    }

    /// Context for write operations (store, update, delete).
    #[must_use]
    pub fn command_context(&self) -> RequestContext {
        RequestContext::new(self.command_timeout)
    }
}

fn millis<F>(lookup: &F, key: &str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(Duration::from_millis(default));
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid(format!("{key} must be greater than zero"))),
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(_) => Err(ConfigError::Invalid(format!(
            "{key} must be a whole number of milliseconds, got {raw:?}"
        ))),
    }
}
