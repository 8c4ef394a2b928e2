//! Configuration Module
//!
//! Loads store and server parameters from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{EvictError, Result};

/// Store and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interval between TTL cache sweeps, in milliseconds
    pub ttl_sweep_interval_ms: u64,
    /// Maximum number of entries retained by the LRU cache
    pub lru_capacity: usize,
    /// Maximum admitted requests per client within one window
    pub rate_limit: usize,
    /// Length of the trailing rate-limit window, in milliseconds
    pub rate_window_ms: u64,
    /// Interval between rate limiter sweeps, in milliseconds
    pub rate_sweep_interval_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TTL_SWEEP_INTERVAL_MS` - TTL sweep interval (default: 1000)
    /// - `LRU_CAPACITY` - LRU capacity (default: 1000)
    /// - `RATE_LIMIT` - Requests per window per client (default: 100)
    /// - `RATE_WINDOW_MS` - Window length (default: 60000)
    /// - `RATE_SWEEP_INTERVAL_MS` - Limiter sweep interval (default: 10000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_sweep_interval_ms: env_or("TTL_SWEEP_INTERVAL_MS", defaults.ttl_sweep_interval_ms),
            lru_capacity: env_or("LRU_CAPACITY", defaults.lru_capacity),
            rate_limit: env_or("RATE_LIMIT", defaults.rate_limit),
            rate_window_ms: env_or("RATE_WINDOW_MS", defaults.rate_window_ms),
            rate_sweep_interval_ms: env_or(
                "RATE_SWEEP_INTERVAL_MS",
                defaults.rate_sweep_interval_ms,
            ),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }

    /// Rejects parameters the stores cannot be built with.
    ///
    /// A zero LRU capacity is allowed: that cache simply retains nothing.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (self.ttl_sweep_interval_ms == 0, "TTL_SWEEP_INTERVAL_MS must be greater than 0"),
            (self.rate_limit == 0, "RATE_LIMIT must be greater than 0"),
            (self.rate_window_ms == 0, "RATE_WINDOW_MS must be greater than 0"),
            (self.rate_sweep_interval_ms == 0, "RATE_SWEEP_INTERVAL_MS must be greater than 0"),
        ];

        match checks.iter().find(|(failed, _)| *failed) {
            Some((_, msg)) => Err(EvictError::InvalidConfig(msg.to_string())),
            None => Ok(()),
        }
    }

    // == Duration Accessors ==
    /// Interval between TTL cache sweeps.
    pub fn ttl_sweep_interval(&self) -> Duration {
        Duration::from_millis(self.ttl_sweep_interval_ms)
    }

    /// Trailing window of the rate limiter.
    pub fn rate_window(&self) -> Duration {
        Duration::from_millis(self.rate_window_ms)
    }

    /// Interval between rate limiter sweeps.
    pub fn rate_sweep_interval(&self) -> Duration {
        Duration::from_millis(self.rate_sweep_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_sweep_interval_ms: 1000,
            lru_capacity: 1000,
            rate_limit: 100,
            rate_window_ms: 60_000,
            rate_sweep_interval_ms: 10_000,
            server_port: 3000,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.ttl_sweep_interval_ms, 1000);
        assert_eq!(config.lru_capacity, 1000);
        assert_eq!(config.rate_limit, 100);
        assert_eq!(config.rate_window_ms, 60_000);
        assert_eq!(config.rate_sweep_interval_ms, 10_000);
        assert_eq!(config.server_port, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env_defaults() {
        env::remove_var("TTL_SWEEP_INTERVAL_MS");
        env::remove_var("LRU_CAPACITY");
        env::remove_var("RATE_LIMIT");
        env::remove_var("RATE_WINDOW_MS");
        env::remove_var("RATE_SWEEP_INTERVAL_MS");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.lru_capacity, 1000);
        assert_eq!(config.rate_window(), Duration::from_secs(60));
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let config = Config {
            rate_window_ms: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EvictError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let config = Config {
            rate_limit: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EvictError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_allows_zero_lru_capacity() {
        let config = Config {
            lru_capacity: 0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
