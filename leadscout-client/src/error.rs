//! Error types for the Leadscout client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the discovery backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// A discovery job for this campaign is already running and force was not set
    #[error("a discovery job is already running for this campaign (pass force to restart)")]
    JobAlreadyRunning,

    /// The backend reported a job state this client doesn't understand
    #[error(transparent)]
    UnknownJobState(#[from] leadscout_core::dto::job::UnknownJobState),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error (e.g., an expired task id)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if the backend rejected the launch because a job was in flight
    pub fn is_launch_rejected(&self) -> bool {
        matches!(self, Self::JobAlreadyRunning)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_predicates() {
        let not_found = ClientError::api_error(404, "no such job");
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let server = ClientError::api_error(503, "backend down");
        assert!(server.is_server_error());
        assert!(!server.is_client_error());

        let rejected = ClientError::JobAlreadyRunning;
        assert!(rejected.is_launch_rejected());
        assert!(!rejected.is_not_found());
    }
}
