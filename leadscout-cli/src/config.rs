//! Configuration module
//!
//! Handles CLI configuration including the backend URL and other settings.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the discovery backend
    pub api_url: String,
}
