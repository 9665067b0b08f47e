use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const ENV_SPREADSHEET_ID: &str = "GOOGLE_SPREADSHEET_ID";
pub const ENV_ACCESS_TOKEN: &str = "GOOGLE_ACCESS_TOKEN";
pub const ENV_SHEET_NAME: &str = "GOOGLE_SHEET_NAME";
pub const ENV_AUDIT_SHEET_NAME: &str = "GOOGLE_AUDIT_SHEET_NAME";
pub const ENV_API_URL: &str = "GOOGLE_SHEETS_API_URL";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

pub const DEFAULT_SHEET_NAME: &str = "Base Mail";
pub const DEFAULT_AUDIT_SHEET_NAME: &str = "Auditoria";
pub const DEFAULT_API_URL: &str = "https://sheets.googleapis.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

// ── Log level ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err("expected error|warn|info|debug|trace".to_string()),
        }
    }
}

// ── Log format ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "pretty" => Ok(Self::Text),
            _ => Err("expected json|text".to_string()),
        }
    }
}

// ── Sheets connection ─────────────────────────────────────────────

/// # Documentation
/// - Where the event sheet lives and how to reach it.
/// - `access_token` is a short-lived OAuth bearer token minted outside this service;
///   it is never serialized and is redacted from `Debug` output.
#[derive(Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    #[serde(skip_serializing, default)]
    pub access_token: String,
    pub sheet_name: String,
    pub audit_sheet_name: String,
    pub api_base_url: String,
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("access_token", &"<redacted>")
            .field("sheet_name", &self.sheet_name)
            .field("audit_sheet_name", &self.audit_sheet_name)
            .field("api_base_url", &self.api_base_url)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl SheetsConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through `lookup`, treating blank values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::MissingVar(name));

        let log_level = match get(ENV_LOG_LEVEL) {
            Some(value) => value.parse().map_err(|reason| ConfigError::InvalidValue {
                var: ENV_LOG_LEVEL,
                value,
                reason,
            })?,
            None => LogLevel::default(),
        };
        let log_format = match get(ENV_LOG_FORMAT) {
            Some(value) => value.parse().map_err(|reason| ConfigError::InvalidValue {
                var: ENV_LOG_FORMAT,
                value,
                reason,
            })?,
            None => LogFormat::default(),
        };

        let api_base_url = get(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                var: ENV_API_URL,
                value: api_base_url,
                reason: "expected an http(s) url".to_string(),
            });
        }

        Ok(Self {
            spreadsheet_id: required(ENV_SPREADSHEET_ID)?,
            access_token: required(ENV_ACCESS_TOKEN)?,
            sheet_name: get(ENV_SHEET_NAME).unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
            audit_sheet_name: get(ENV_AUDIT_SHEET_NAME).unwrap_or_else(|| DEFAULT_AUDIT_SHEET_NAME.to_string()),
            api_base_url,
            log_level,
            log_format,
        })
    }
}
