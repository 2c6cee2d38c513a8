//! Layered configuration for the wishlist server.
//!
//! Sources, highest priority last:
//! 1. Built-in defaults
//! 2. `secrets.toml` in the working directory (or the file named by `WISHLIST_SECRETS`)
//! 3. Environment variables with the `WISHLIST_` prefix; `__` separates sections,
//!    e.g. `WISHLIST_SHEET__SPREADSHEET_ID`.
//!
//! The `[gspread]` table holds the fields of the service-account JSON key.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wishlist_sheets::{ServiceAccountKey, SheetSettings, DEFAULT_API_BASE};

use super::logging::{LogDestination, DEFAULT_LOG_FILE};

const DEFAULT_SECRETS_FILE: &str = "secrets.toml";
const SECRETS_PATH_VAR: &str = "WISHLIST_SECRETS";
const ENV_PREFIX: &str = "WISHLIST_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    #[error("Configuration section '{section}' is not configured (missing required fields)")]
    NotConfigured { section: String },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub gspread: Option<ServiceAccountKey>,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// Idle sessions older than this are dropped.
    pub session_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8501".to_string(),
            session_ttl_secs: 12 * 60 * 60,
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SheetConfig {
    pub spreadsheet_id: String,
    pub worksheet: String,
    pub api_base: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Pre-minted bearer token; takes precedence over `[gspread]`.
    pub access_token: Option<String>,
    /// Keep rows in process memory instead of talking to Google Sheets.
    pub offline: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            worksheet: "sheet1".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            access_token: None,
            offline: false,
        }
    }
}

impl std::fmt::Debug for SheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetConfig")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("worksheet", &self.worksheet)
            .field("api_base", &self.api_base)
            .field(
                "access_token",
                &self.access_token.as_deref().map(wishlist_logging::redact),
            )
            .field("offline", &self.offline)
            .finish()
    }
}

impl SheetConfig {
    pub fn settings(&self) -> SheetSettings {
        SheetSettings {
            api_base: self.api_base.clone(),
            spreadsheet_id: self.spreadsheet_id.clone(),
            worksheet: self.worksheet.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    pub destination: LogDestination,
    pub level: String,
    /// Used when `destination` is `file` or `both`.
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            destination: LogDestination::Terminal,
            level: "info".to_string(),
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from all sources.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment() -> Figment {
        let secrets_path = std::env::var(SECRETS_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRETS_FILE));

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(secrets_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        self.log_level()?;
        if self.server.session_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.session_ttl_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.sheet.offline {
            return Ok(());
        }
        if self.sheet.spreadsheet_id.trim().is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "sheet.spreadsheet_id".to_string(),
            });
        }
        if self.gspread.is_none() && self.sheet.access_token.is_none() {
            return Err(ConfigError::NotConfigured {
                section: "gspread".to_string(),
            });
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|err: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "server.bind".to_string(),
                reason: err.to_string(),
            })
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log.level).map_err(|err| ConfigError::InvalidValue {
            field: "log.level".to_string(),
            reason: err.to_string(),
        })
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.server.session_ttl_secs)
    }
}
