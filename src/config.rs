//! Runtime configuration read from the environment (optionally via `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DATABASE_URL: &str = "messages.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Which backend holds messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    /// SQLite file (or `sqlite::memory:`) at `DATABASE_URL`.
    Sqlite,
    /// Process-local vector; lost on restart.
    Memory,
}

impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StorageKind::Sqlite),
            "memory" => Ok(StorageKind::Memory),
            _ => Err(ConfigError::Invalid {
                key: "MESSAGES_STORAGE",
                value: s.to_string(),
                reason: "expected sqlite or memory".into(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub storage: StorageKind,
    pub max_connections: u32,
    /// Request bodies above this many bytes are answered with 413.
    pub body_limit: usize,
}

impl Config {
    /// Read `BIND_ADDR`, `DATABASE_URL`, `MESSAGES_STORAGE`, `DB_MAX_CONNECTIONS` and `BODY_LIMIT_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an explicit variable source. Unset or blank values use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = parse_value("BIND_ADDR", &bind_addr)?;
        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let storage = match get("MESSAGES_STORAGE") {
            Some(s) => s.parse()?,
            None => StorageKind::Sqlite,
        };
        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(s) => parse_value("DB_MAX_CONNECTIONS", &s)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }
        let body_limit = match get("BODY_LIMIT_BYTES") {
            Some(s) => parse_value("BODY_LIMIT_BYTES", &s)?,
            None => DEFAULT_BODY_LIMIT,
        };
        Ok(Config {
            bind_addr,
            database_url,
            storage,
            max_connections,
            body_limit,
        })
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.database_url, "messages.db");
        assert_eq!(config.storage, StorageKind::Sqlite);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.body_limit, DEFAULT_BODY_LIMIT);
    }

    #[test]
    fn reads_overrides() {
        let config = from_pairs(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("MESSAGES_STORAGE", "Memory"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("BODY_LIMIT_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.body_limit, 1024);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = from_pairs(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            from_pairs(&[("MESSAGES_STORAGE", "postgres")]),
            Err(ConfigError::Invalid { key: "MESSAGES_STORAGE", .. })
        ));
        assert!(matches!(
            from_pairs(&[("BIND_ADDR", "nowhere")]),
            Err(ConfigError::Invalid { key: "BIND_ADDR", .. })
        ));
        assert!(matches!(
            from_pairs(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(from_pairs(&[("BODY_LIMIT_BYTES", "lots")]).is_err());
    }
}
