use chrono_tz::Tz;

use super::{Result, ServerError};

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | sqlite:assignments.db | SQLite database |
/// | HTTP_HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 8000 | bind port |
/// | ENVIRONMENT | development | development / staging / production |
/// | TIME_ZONE | UTC | zone used for naive timestamps |
/// | DB_MAX_CONNECTIONS | 5 | pool size |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
/// | LOG_LEVEL | info | default log filter |
/// | LOG_JSON | false | emit JSON log lines |
/// | LOG_DIR | (unset) | daily rolling log file directory |
///
/// ```ignore
/// HTTP_PORT=9000 TIME_ZONE=Europe/Madrid cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub http_host: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    /// Zone naive timestamps are interpreted in
    pub time_zone: Tz,
    pub db_max_connections: u32,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; set but malformed values fail.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let time_zone = match lookup("TIME_ZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| ServerError::Config(format!("Unknown TIME_ZONE: {name}")))?,
            None => Tz::UTC,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:assignments.db".into()),
            http_host: lookup("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: parse_var(&lookup, "HTTP_PORT", 8000)?,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            time_zone,
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            request_timeout_ms: parse_var(&lookup, "REQUEST_TIMEOUT_MS", 30_000)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
        })
    }

    /// In-memory configuration for tests
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            http_host: "127.0.0.1".into(),
            http_port: 0,
            environment: "test".into(),
            time_zone: Tz::UTC,
            db_max_connections: 1,
            request_timeout_ms: 30_000,
            log_level: "debug".into(),
            log_json: false,
            log_dir: None,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ServerError::Config(format!("Invalid {key}: {raw}"))),
        None => Ok(default),
    }
}
