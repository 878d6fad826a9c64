//! Configuration management for Dispatch.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present. Every setting
//! is optional; the defaults reproduce the standard harvesting run.

use crate::domain::KindSet;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// User-Agent sent with the page request unless overridden.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Configuration for a harvesting session.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP GET timeout in seconds (default: 30)
    pub fetch_timeout_secs: u64,

    /// Headless render timeout in seconds (default: 30)
    pub render_timeout_secs: u64,

    /// Delay after page load before reading the DOM, in milliseconds (default: 2000)
    pub settle_ms: u64,

    /// Run embedded scripts in a headless browser (default: true)
    pub render_enabled: bool,

    /// Explicit Chromium executable; auto-detected when unset
    pub chrome_path: Option<PathBuf>,

    /// Contact kinds the extractor produces (default: all)
    pub kinds: KindSet,

    /// User-Agent header for the page request
    pub user_agent: String,

    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DISPATCH_FETCH_TIMEOUT_SECS`: HTTP timeout in seconds (default: 30)
    /// - `DISPATCH_RENDER_TIMEOUT_SECS`: Render timeout in seconds (default: 30)
    /// - `DISPATCH_SETTLE_MS`: Settle delay after load (default: 2000)
    /// - `DISPATCH_RENDER`: Enable headless rendering (default: true)
    /// - `DISPATCH_CHROME_PATH`: Chromium executable path
    /// - `DISPATCH_KINDS`: Comma-separated kinds, e.g. `email,phone` (default: all)
    /// - `DISPATCH_USER_AGENT`: Request User-Agent
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let fetch_timeout_secs = Self::parse_env_timeout("DISPATCH_FETCH_TIMEOUT_SECS", 30)?;
        let render_timeout_secs = Self::parse_env_timeout("DISPATCH_RENDER_TIMEOUT_SECS", 30)?;
        let settle_ms = Self::parse_env_u64("DISPATCH_SETTLE_MS", 2000)?;
        let render_enabled = Self::parse_env_bool("DISPATCH_RENDER", true)?;

        let chrome_path = env::var("DISPATCH_CHROME_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let kinds = match env::var("DISPATCH_KINDS") {
            Ok(raw) => {
                let kinds: KindSet = raw.parse().map_err(|e| ConfigError::InvalidValue {
                    var: "DISPATCH_KINDS".to_string(),
                    reason: format!("{}", e),
                })?;
                if kinds.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "DISPATCH_KINDS".to_string(),
                        reason: "At least one kind must be enabled".to_string(),
                    });
                }
                kinds
            }
            Err(_) => KindSet::all(),
        };

        let user_agent = env::var("DISPATCH_USER_AGENT")
            .ok()
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            fetch_timeout_secs,
            render_timeout_secs,
            settle_ms,
            render_enabled,
            chrome_path,
            kinds,
            user_agent,
            log_level,
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse a timeout in seconds; zero would disable the bound, so it is rejected.
    fn parse_env_timeout(var_name: &str, default: u64) -> ConfigResult<u64> {
        let secs = Self::parse_env_u64(var_name, default)?;
        if secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }
        Ok(secs)
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fetch_timeout_secs: 30,
            render_timeout_secs: 30,
            settle_ms: 2000,
            render_enabled: true,
            chrome_path: None,
            kinds: KindSet::all(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: "warn".to_string(),
        }
    }
}
