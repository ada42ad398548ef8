//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file in the working directory is honoured (loaded by
//! `main.rs` via `dotenvy`).
//!
//! ## Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`)
//! - `STORAGE_PATH` - SQLite database file (default: `./storage/storage.db`)
//! - `LISTEN` - Bind address (default: `localhost:8082`)
//! - `HTTP_TIMEOUT` - Request timeout in seconds (default: 4)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `HTTP_USER` / `HTTP_PASSWORD` - Enable basic auth on `/url` routes
//! - `RUST_LOG` - Log filter (default depends on `APP_ENV`)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::api::middleware::auth::BasicCredentials;
use crate::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

/// Upper bound for `ALIAS_LENGTH`.
const MAX_ALIAS_LENGTH: usize = 64;

/// Deployment environment; selects the log format and default level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    /// Human-readable logs at debug level.
    Local,
    /// JSON logs at debug level.
    Dev,
    /// JSON logs at info level.
    Prod,
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Local => "local",
            AppEnv::Dev => "dev",
            AppEnv::Prod => "prod",
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            AppEnv::Local | AppEnv::Dev => "debug",
            AppEnv::Prod => "info",
        }
    }

    pub fn json_logs(&self) -> bool {
        !matches!(self, AppEnv::Local)
    }
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub storage_path: String,
    pub listen_addr: String,
    pub log_level: String,
    /// Requests running longer than this are answered with `408`.
    pub request_timeout: Duration,
    /// Length of aliases generated for requests that do not supply one.
    pub alias_length: usize,
    /// Maximum number of connections in the SQLite pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
    /// Basic-auth credentials for mutating routes; `None` disables auth.
    pub credentials: Option<BasicCredentials>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed, or if
    /// `HTTP_USER` is set without `HTTP_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse::<AppEnv>()?;

        let storage_path =
            env::var("STORAGE_PATH").unwrap_or_else(|_| "./storage/storage.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "localhost:8082".to_string());
        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| env.default_log_level().to_string());

        let request_timeout = Duration::from_secs(parse_var("HTTP_TIMEOUT", 4)?);
        let alias_length = parse_var("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH)?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;

        let credentials = Self::load_credentials()?;

        Ok(Self {
            env,
            storage_path,
            listen_addr,
            log_level,
            request_timeout,
            alias_length,
            db_max_connections,
            credentials,
        })
    }

    /// Loads basic-auth credentials.
    ///
    /// Auth is enabled by `HTTP_USER`; `HTTP_PASSWORD` is then mandatory.
    fn load_credentials() -> Result<Option<BasicCredentials>> {
        let Ok(user) = env::var("HTTP_USER") else {
            return Ok(None);
        };

        let password =
            env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set when HTTP_USER is set")?;

        Ok(Some(BasicCredentials::new(user, password)))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `storage_path` is empty
    /// - `request_timeout` is zero
    /// - `alias_length` is outside `1..=64`
    /// - `db_max_connections` is zero
    /// - the basic-auth user is empty
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.alias_length == 0 || self.alias_length > MAX_ALIAS_LENGTH {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and {}, got {}",
                MAX_ALIAS_LENGTH,
                self.alias_length
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        if let Some(ref credentials) = self.credentials
            && credentials.user.is_empty()
        {
            anyhow::bail!("HTTP_USER must not be empty");
        }

        Ok(())
    }

    /// Returns whether basic auth protects the mutating routes.
    pub fn is_auth_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env.as_str());
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Request timeout: {:?}", self.request_timeout);
        tracing::info!("  Alias length: {}", self.alias_length);

        if let Some(ref credentials) = self.credentials {
            tracing::info!("  Basic auth: enabled (user: {})", credentials.user);
        } else {
            tracing::info!("  Basic auth: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
    }
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
