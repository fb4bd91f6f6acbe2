//! Configuration module
//!
//! Configuration is read once from the environment (and an optional `.env` file) and then
//! passed explicitly to whatever needs it. `DATABASE_URL` is optional at startup: without it
//! the process still starts and serves health checks, but every data operation fails.

use std::env;
use std::path::PathBuf;

// Common constants
const SERVER_PORT: u16 = 8000;
const UPLOAD_DIR: &str = "uploads";
const DB_MAX_CONNECTIONS: u32 = 10;
const DB_TIMEOUT_SECS: u64 = 30;
const MAX_UPLOAD_SIZE_MB: usize = 50;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Catalog connection string. `None` leaves the catalog unconfigured.
    pub database_url: Option<String>,
    /// Directory holding the stored PDF files.
    pub upload_dir: PathBuf,
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub max_upload_size_bytes: usize,
    /// `json` for structured log output, anything else for human-readable lines.
    pub log_format: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("ENVIRONMENT")
            .or_else(|| get("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins = get("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let config = Config {
            database_url: get("DATABASE_URL"),
            upload_dir: get("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(UPLOAD_DIR)),
            server_port: parse_or(get("PORT"), SERVER_PORT, "PORT")?,
            cors_origins,
            environment,
            db_max_connections: parse_or(
                get("DB_MAX_CONNECTIONS"),
                DB_MAX_CONNECTIONS,
                "DB_MAX_CONNECTIONS",
            )?,
            db_timeout_seconds: parse_or(
                get("DB_TIMEOUT_SECONDS"),
                DB_TIMEOUT_SECS,
                "DB_TIMEOUT_SECONDS",
            )?,
            max_upload_size_bytes: parse_or(
                get("MAX_UPLOAD_SIZE_BYTES"),
                MAX_UPLOAD_SIZE_MB * 1024 * 1024,
                "MAX_UPLOAD_SIZE_BYTES",
            )?,
            log_format: get("LOG_FORMAT").unwrap_or_else(|| "text".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if let Some(url) = &self.database_url {
            if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
                return Err(anyhow::anyhow!(
                    "DATABASE_URL must be a valid PostgreSQL connection string"
                ));
            }
        }

        if self.db_max_connections == 0 {
            return Err(anyhow::anyhow!("DB_MAX_CONNECTIONS must be at least 1"));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_BYTES must be greater than 0"));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    default: T,
    key: &str,
) -> Result<T, anyhow::Error> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} has an invalid value: '{}'", key, raw)),
        None => Ok(default),
    }
}
