//! Poller configuration
//!
//! Defines the configurable parameters for a polling session. Intervals
//! are tunable so the same driver works for snappy dev loops and gentler
//! production polling.

use std::time::Duration;

/// Polling session configuration
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// How often to fetch a status snapshot from the backend
    pub interval: Duration,
}

impl PollConfig {
    /// Creates a new configuration with the given poll interval
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - LEADSCOUT_POLL_INTERVAL (optional, seconds, default: 2)
    pub fn from_env() -> Self {
        let interval = std::env::var("LEADSCOUT_POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(2));

        Self { interval }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.interval.is_zero() {
            return Err("poll interval must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PollConfig::default();
        assert_eq!(config.interval, Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_is_invalid() {
        let config = PollConfig::new(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
