use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_DB_PATH: &str = "game.db.json";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_JAEGER_ENDPOINT: &str = "http://jaeger:14268/api/traces";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, read from the environment.
///
/// | Variable             | Default                          |
/// |----------------------|----------------------------------|
/// | `LEAGUE_DB_PATH`     | `game.db.json`                   |
/// | `LEAGUE_LISTEN_ADDR` | `0.0.0.0:5000`                   |
/// | `ENABLE_TELEMETRY`   | `false`                          |
/// | `JAEGER_ENDPOINT`    | `http://jaeger:14268/api/traces` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub listen_addr: SocketAddr,
    pub enable_telemetry: bool,
    pub jaeger_endpoint: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            enable_telemetry: false,
            jaeger_endpoint: DEFAULT_JAEGER_ENDPOINT.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup("LEAGUE_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }

        if let Some(addr) = lookup("LEAGUE_LISTEN_ADDR") {
            config.listen_addr = addr.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    key: "LEAGUE_LISTEN_ADDR",
                    value: addr.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(flag) = lookup("ENABLE_TELEMETRY") {
            config.enable_telemetry = flag.parse().map_err(|e: std::str::ParseBoolError| {
                ConfigError::InvalidValue {
                    key: "ENABLE_TELEMETRY",
                    value: flag.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(endpoint) = lookup("JAEGER_ENDPOINT") {
            config.jaeger_endpoint = endpoint;
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("LEAGUE_DB_PATH", "/var/lib/league.json"),
            ("LEAGUE_LISTEN_ADDR", "127.0.0.1:8080"),
            ("ENABLE_TELEMETRY", "true"),
            ("JAEGER_ENDPOINT", "http://localhost:14268/api/traces"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/var/lib/league.json"));
        assert_eq!(config.listen_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert!(config.enable_telemetry);
        assert_eq!(config.jaeger_endpoint, "http://localhost:14268/api/traces");
    }

    #[test]
    fn test_invalid_listen_addr() {
        let err = Config::from_lookup(lookup(&[("LEAGUE_LISTEN_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "LEAGUE_LISTEN_ADDR",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_telemetry_flag() {
        let err = Config::from_lookup(lookup(&[("ENABLE_TELEMETRY", "yes")])).unwrap_err();
        assert!(err.to_string().contains("ENABLE_TELEMETRY"));
    }
}
