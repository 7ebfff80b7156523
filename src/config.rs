//! Configuration types.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Which front end serves the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Terminal REPL on stdin/stdout.
    Cli,
    /// JSON API over HTTP.
    Http,
}

impl std::str::FromStr for Mode {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cli" => Ok(Self::Cli),
            "http" => Ok(Self::Http),
            other => Err(ConfigError::InvalidValue {
                key: "LIFELINE_MODE".to_string(),
                message: format!("expected 'cli' or 'http', got '{other}'"),
            }),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: Mode,
    /// Port for the HTTP front end.
    pub http_port: u16,
    /// Optional JSON file replacing the built-in sample records.
    pub records_path: Option<PathBuf>,
    /// Largest photo upload the HTTP front end accepts.
    pub max_photo_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Cli,
            http_port: 8080,
            records_path: None,
            max_photo_bytes: 10 * 1024 * 1024, // 10 MiB
        }
    }
}

impl AppConfig {
    /// Build from `LIFELINE_*` environment variables.
    ///
    /// An unknown mode is an error; unparsable numbers fall back to the
    /// default with a warning.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mode = match get("LIFELINE_MODE") {
            Some(raw) => raw.parse()?,
            None => defaults.mode,
        };

        Ok(Self {
            mode,
            http_port: parse_or("LIFELINE_HTTP_PORT", get("LIFELINE_HTTP_PORT"), defaults.http_port),
            records_path: get("LIFELINE_RECORDS_PATH")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            max_photo_bytes: parse_or(
                "LIFELINE_MAX_PHOTO_BYTES",
                get("LIFELINE_MAX_PHOTO_BYTES"),
                defaults.max_photo_bytes,
            ),
        })
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, fallback = %default, "Invalid config value, using default");
            default
        }),
    }
}
