//! Leadscout HTTP Client
//!
//! A simple, type-safe HTTP client for the lead-discovery backend API.
//!
//! This crate provides the two boundary calls the poller depends on —
//! launching a discovery job and fetching its status — plus the shared
//! response handling both go through.
//!
//! # Example
//!
//! ```no_run
//! use leadscout_client::DiscoveryClient;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = DiscoveryClient::new("http://localhost:8080");
//!
//!     // Launch a discovery job for a campaign
//!     let task_id = client.launch_discovery(Uuid::new_v4(), false).await?;
//!
//!     let snapshot = client.fetch_status(&task_id).await?;
//!     println!("job {} is {:?}", task_id, snapshot.state);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use leadscout_core::domain::job::{StatusSnapshot, TaskId};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the lead-discovery backend API
///
/// The backend performs the actual discovery, scoring, and suggestion work;
/// this client only launches jobs and reads status snapshots. Retry policy
/// belongs to the caller — no method here retries internally.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    /// Base URL of the backend (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl DiscoveryClient {
    /// Create a new discovery client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use leadscout_client::DiscoveryClient;
    ///
    /// let client = DiscoveryClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new discovery client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use leadscout_client::DiscoveryClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = DiscoveryClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DiscoveryClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = DiscoveryClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = DiscoveryClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
