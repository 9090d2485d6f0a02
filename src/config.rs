// src/config.rs
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite file holding the parking records.
    pub db_path: String,
    /// Schema applied at start-up.
    pub schema_path: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Drop a record from storage as soon as its exit is billed.
    /// Purged records no longer show up in the report.
    pub purge_on_exit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: "parking.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            purge_on_exit: false,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `PARKING_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(v) = lookup("PARKING_DB_PATH") {
            cfg.db_path = v;
        }
        if let Some(v) = lookup("PARKING_SCHEMA_PATH") {
            cfg.schema_path = v;
        }
        if let Some(v) = lookup("PARKING_ADDR") {
            cfg.bind_addr = parse("PARKING_ADDR", v)?;
        }
        if let Some(v) = lookup("PARKING_MAX_WORKERS") {
            cfg.max_workers = parse("PARKING_MAX_WORKERS", v)?;
            if cfg.max_workers == 0 {
                return Err(ConfigError::Invalid {
                    var: "PARKING_MAX_WORKERS",
                    value: "0".into(),
                    reason: "must be at least 1".into(),
                });
            }
        }
        if let Some(v) = lookup("PARKING_PURGE_ON_EXIT") {
            cfg.purge_on_exit = parse_flag("PARKING_PURGE_ON_EXIT", v)?;
        }

        Ok(cfg)
    }
}

fn parse<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value,
            reason: "expected true or false".into(),
        }),
    }
}
