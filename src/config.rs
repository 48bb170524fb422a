use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_URL: &str = "https://api.balldontlie.io/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SEASON: &str = "2024";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not in the correct format: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    /// Bearer token for the balldontlie API. `None` when unset or blank.
    pub api_key: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub upstream_base_url: String,
    pub upstream_timeout: Duration,
    pub default_season: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = match var("HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name: "HOST", value })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match var("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs: u64 = match var("UPSTREAM_TIMEOUT_SECS") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "UPSTREAM_TIMEOUT_SECS", value })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let upstream_base_url = var("BALLDONTLIE_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            api_key: var("BALLDONTLIE_API_KEY"),
            host,
            port,
            upstream_base_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            default_season: var("DEFAULT_SEASON").unwrap_or_else(|| DEFAULT_SEASON.to_string()),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("upstream_base_url", &self.upstream_base_url)
            .field("upstream_timeout", &self.upstream_timeout)
            .field("default_season", &self.default_season)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.api_key, None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.upstream_base_url, "https://api.balldontlie.io/v1");
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.default_season, "2024");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("BALLDONTLIE_API_KEY", "secret"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("BALLDONTLIE_BASE_URL", "http://localhost:9000/v1/"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            ("DEFAULT_SEASON", "2023"),
        ])
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.upstream_base_url, "http://localhost:9000/v1");
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
        assert_eq!(config.default_season, "2023");
    }

    #[test]
    fn blank_api_key_counts_as_unset() {
        let config = config_from(&[("BALLDONTLIE_API_KEY", "   ")]).unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = config_from(&[("BALLDONTLIE_API_KEY", "secret")]).unwrap();
        let printed = format!("{config:?}");

        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
        assert_eq!(err.to_string(), "PORT is not in the correct format: \"eighty\"");
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = config_from(&[("UPSTREAM_TIMEOUT_SECS", "-1")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "UPSTREAM_TIMEOUT_SECS", .. }));
    }
}
