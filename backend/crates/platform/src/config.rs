//! Environment configuration helpers
//!
//! Binaries read their settings once at startup through these helpers and
//! hand typed config structs to the engines. An empty variable counts as
//! unset.

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::http::DEFAULT_TIMEOUT_SECS;

pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

fn from_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A variable that must be present and non-empty
pub fn required(name: &str) -> Result<String, ConfigError> {
    required_with(from_env, name)
}

/// A variable that may be absent
pub fn optional(name: &str) -> Option<String> {
    non_empty(from_env(name))
}

/// Parse a variable, falling back to `default` when unset
pub fn parse_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_or_with(from_env, name, default)
}

fn required_with(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Result<String, ConfigError> {
    non_empty(lookup(name)).ok_or_else(|| ConfigError::Missing(name.to_string()))
}

fn parse_or_with<T>(
    lookup: impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match non_empty(lookup(name)) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name: name.to_string(),
            value: raw,
            reason: e.to_string(),
        }),
    }
}

// ============================================================================
// Shared settings
// ============================================================================

/// `0.0.0.0:$PORT`
pub fn listen_addr(default_port: u16) -> Result<SocketAddr, ConfigError> {
    let port = parse_or("PORT", default_port)?;
    Ok(SocketAddr::from(([0, 0, 0, 0], port)))
}

/// `HTTP_TIMEOUT_SECS`, default 5
pub fn http_timeout() -> Result<Duration, ConfigError> {
    parse_or("HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS).map(Duration::from_secs)
}

/// `REDIS_URL`, default local Redis
pub fn redis_url() -> String {
    optional("REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string())
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: required("DATABASE_URL")?,
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_required_present() {
        let lookup = source(&[("JWT_SECRET", "s3cret")]);
        assert_eq!(required_with(lookup, "JWT_SECRET").unwrap(), "s3cret");
    }

    #[test]
    fn test_required_missing_or_blank() {
        assert!(matches!(
            required_with(source(&[]), "JWT_SECRET"),
            Err(ConfigError::Missing(_))
        ));
        assert!(matches!(
            required_with(source(&[("JWT_SECRET", "  ")]), "JWT_SECRET"),
            Err(ConfigError::Missing(_))
        ));
    }

    #[test]
    fn test_parse_or_default() {
        let value: u64 = parse_or_with(source(&[]), "HTTP_TIMEOUT_SECS", 5).unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_parse_or_value() {
        let value: u16 = parse_or_with(source(&[("PORT", "8081")]), "PORT", 8080).unwrap();
        assert_eq!(value, 8081);
    }

    #[test]
    fn test_parse_or_invalid() {
        let result: Result<u16, _> = parse_or_with(source(&[("PORT", "eighty")]), "PORT", 8080);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
