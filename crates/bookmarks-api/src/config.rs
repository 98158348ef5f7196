//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8000` |
//! | `API_TOKEN` | required |
//! | `STORAGE_BACKEND` | `postgres` (`postgres` or `memory`) |
//! | `DATABASE_URL` | `postgres://localhost/bookmarks` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `RUN_MIGRATIONS` | `true` |
//! | `ALLOWED_ORIGINS` | `http://localhost:3000` |
//! | `MAX_BODY_BYTES` | `102400` |
//! | `LOG_FORMAT` | `text` (`text` or `json`) |
//! | `LOG_FILE` | unset (stdout only) |
//! | `LOG_ANSI` | auto-detected |

use std::net::SocketAddr;
use std::str::FromStr;

use bookmarks_core::{Error, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/bookmarks";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";
/// Matches the 100kb default of the JSON body parser clients were built against.
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Which `BookmarkRepository` implementation to serve from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(Error::Config(format!(
                "STORAGE_BACKEND must be 'postgres' or 'memory', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Optional log file, rotated daily.
    pub file: Option<String>,
    /// Force ANSI colours on or off; `None` auto-detects.
    pub ansi: Option<bool>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            file: None,
            ansi: None,
        }
    }
}

/// HTTP layer settings applied by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
    /// CORS origin allow-list.
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_token: String,
    pub storage: StorageBackend,
    pub database_url: String,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub http: HttpOptions,
    pub log: LogConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_token = var("API_TOKEN")
            .ok_or_else(|| Error::Config("API_TOKEN must be set".to_string()))?;

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("PORT must be a port number, got '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        let storage = match var("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::Postgres,
        };

        let db_max_connections = parse_number(var("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS")?
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);
        if db_max_connections == 0 {
            return Err(Error::Config(
                "DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        let max_body_bytes =
            parse_number(var("MAX_BODY_BYTES"), "MAX_BODY_BYTES")?.unwrap_or(DEFAULT_MAX_BODY_BYTES);

        let format = match var("LOG_FORMAT").as_deref().map(str::trim) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_token,
            storage,
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            db_max_connections,
            run_migrations: var("RUN_MIGRATIONS").map(|v| is_truthy(&v)).unwrap_or(true),
            http: HttpOptions {
                allowed_origins: parse_origins(
                    var("ALLOWED_ORIGINS")
                        .as_deref()
                        .unwrap_or(DEFAULT_ALLOWED_ORIGINS),
                ),
                max_body_bytes,
            },
            log: LogConfig {
                format,
                file: var("LOG_FILE"),
                ansi: var("LOG_ANSI").map(|v| is_truthy(&v)),
            },
        })
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid HOST '{}': {}", self.host, e)))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim(), "true" | "1")
}

fn parse_number<T: FromStr>(raw: Option<String>, key: &str) -> Result<Option<T>> {
    raw.map(|v| {
        v.trim()
            .parse::<T>()
            .map_err(|_| Error::Config(format!("{} must be a number, got '{}'", key, v)))
    })
    .transpose()
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("API_TOKEN", "secret")]).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.api_token, "secret");
        assert_eq!(config.storage, StorageBackend::Postgres);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
        assert!(config.run_migrations);
        assert_eq!(config.http, HttpOptions::default());
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_api_token_required() {
        let err = config_from(&[]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = config_from(&[("API_TOKEN", "   ")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("API_TOKEN", "secret"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("STORAGE_BACKEND", "memory"),
            ("DATABASE_URL", "postgres://db/bm"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("RUN_MIGRATIONS", "false"),
            ("ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("MAX_BODY_BYTES", "2048"),
            ("LOG_FORMAT", "json"),
            ("LOG_FILE", "/var/log/bookmarks/api.log"),
            ("LOG_ANSI", "0"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9090");
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.database_url, "postgres://db/bm");
        assert_eq!(config.db_max_connections, 4);
        assert!(!config.run_migrations);
        assert_eq!(
            config.http.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.http.max_body_bytes, 2048);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(
            config.log.file.as_deref(),
            Some("/var/log/bookmarks/api.log")
        );
        assert_eq!(config.log.ansi, Some(false));
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("API_TOKEN", "t"), ("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(config_from(&[("API_TOKEN", "t"), ("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_invalid_storage_backend() {
        let err = config_from(&[("API_TOKEN", "t"), ("STORAGE_BACKEND", "redis")]).unwrap_err();
        assert!(err.to_string().contains("STORAGE_BACKEND"));
    }

    #[test]
    fn test_zero_connections_rejected() {
        assert!(config_from(&[("API_TOKEN", "t"), ("DB_MAX_CONNECTIONS", "0")]).is_err());
    }

    #[test]
    fn test_storage_backend_aliases() {
        assert_eq!(
            "PostgreSQL".parse::<StorageBackend>().unwrap(),
            StorageBackend::Postgres
        );
        assert_eq!(
            "in-memory".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
    }

    #[test]
    fn test_invalid_host() {
        let config = config_from(&[("API_TOKEN", "t"), ("HOST", "not a host")]).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
