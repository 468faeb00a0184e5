//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 3000)
//! - `LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag (e.g., production)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, for local development.
    #[default]
    Pretty,
    /// One JSON object per line, for log shippers.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
    /// Fraction of requests traced as Sentry transactions
    pub sentry_traces_sample_rate: f32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_or(&lookup, "HOST", defaults.host)?;
        let port = parse_or(&lookup, "PORT", defaults.port)?;
        let log_format = parse_or(&lookup, "LOG_FORMAT", defaults.log_format)?;
        let sentry_traces_sample_rate = parse_or(
            &lookup,
            "SENTRY_TRACES_SAMPLE_RATE",
            defaults.sentry_traces_sample_rate,
        )?;
        if !(0.0..=1.0).contains(&sentry_traces_sample_rate) {
            return Err(ConfigError::InvalidEnvVar(
                "SENTRY_TRACES_SAMPLE_RATE".to_string(),
                format!("must be between 0.0 and 1.0 (got {sentry_traces_sample_rate})"),
            ));
        }

        Ok(Self {
            host,
            port,
            log_format,
            sentry_dsn: non_empty(lookup("SENTRY_DSN")),
            sentry_environment: non_empty(lookup("SENTRY_ENVIRONMENT")),
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if set and non-empty, otherwise use the default.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty(lookup(key)) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_port_from_env() {
        let config = config_from(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.socket_addr().port(), 8080);
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", ""), ("SENTRY_DSN", "  ")]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PORT"));

        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        assert!(config_from(&[("HOST", "localhost:3000")]).is_err());
    }

    #[test]
    fn test_log_format_parsing() {
        let config = config_from(&[("LOG_FORMAT", "JSON")]).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn test_sample_rate_bounds() {
        let config = config_from(&[("SENTRY_TRACES_SAMPLE_RATE", "0.25")]).unwrap();
        assert!((config.sentry_traces_sample_rate - 0.25).abs() < f32::EPSILON);
        assert!(config_from(&[("SENTRY_TRACES_SAMPLE_RATE", "1.5")]).is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = config_from(&[("HOST", "127.0.0.1"), ("PORT", "3001")]).unwrap();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3001);
    }
}
