//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://s.example.com"
//! export CODE_LENGTH="7"
//! ```
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public address short links are published under
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_LENGTH` - Length of generated codes (default: 7, range: 4-32)
//! - `CODE_MAX_ATTEMPTS` - Collision retries before giving up (default: 10, range: 1-1000)
//! - `RECENT_LIMIT` - Links returned by `/api/recent` (default: 5, range: 1-1000)
//! - `CORS_ENABLED` - Permissive CORS headers (default: `true`)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use url::Url;

use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, MAX_CODE_LENGTH};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base address; short URLs are `{base_url}/{code}`.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub code_length: usize,
    /// Bound on generated-code collisions per insert.
    pub code_max_attempts: usize,
    pub recent_limit: usize,
    pub cors_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            code_length: DEFAULT_CODE_LENGTH,
            code_max_attempts: DEFAULT_MAX_ATTEMPTS,
            recent_limit: crate::state::DEFAULT_RECENT_LIMIT,
            cors_enabled: true,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let base_url = env::var("BASE_URL").unwrap_or(defaults.base_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let code_length = parse_var("CODE_LENGTH")?.unwrap_or(defaults.code_length);
        let code_max_attempts =
            parse_var("CODE_MAX_ATTEMPTS")?.unwrap_or(defaults.code_max_attempts);
        let recent_limit = parse_var("RECENT_LIMIT")?.unwrap_or(defaults.recent_limit);

        let cors_enabled = env::var("CORS_ENABLED")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.cors_enabled);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            code_length,
            code_max_attempts,
            recent_limit,
            cors_enabled,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an absolute http(s) URL
    /// - `code_length`, `code_max_attempts` or `recent_limit` is out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let base = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: '{}'", self.base_url))?;
        if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
            anyhow::bail!(
                "BASE_URL must be an absolute http(s) URL, got '{}'",
                self.base_url
            );
        }

        if !(4..=MAX_CODE_LENGTH).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and {}, got {}",
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 1000 {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 1000, got {}",
                self.code_max_attempts
            );
        }

        if self.recent_limit == 0 || self.recent_limit > 1000 {
            anyhow::bail!(
                "RECENT_LIMIT must be between 1 and 1000, got {}",
                self.recent_limit
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Code length: {} ({} attempts)",
            self.code_length,
            self.code_max_attempts
        );
        tracing::info!("  Recent limit: {}", self.recent_limit);
        tracing::info!(
            "  CORS: {}",
            if self.cors_enabled { "enabled" } else { "disabled" }
        );
    }
}

/// Reads and parses an optional variable. Unset means `None`.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
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
