//! Error taxonomy for a polling session
//!
//! Three ways a session can end in error: the launch was rejected, a status
//! fetch failed, or the job itself reported failure. Every one of them
//! reaches the observer's error callback exactly once — nothing is
//! swallowed, and nothing is retried (a stuck job is indistinguishable from
//! a slow one without server-side confirmation, so retry is the caller's
//! decision).

use leadscout_client::ClientError;
use thiserror::Error;

/// Why a polling session ended in error
#[derive(Debug, Error)]
pub enum PollError {
    /// The backend rejected the launch request
    #[error("failed to launch discovery job: {0}")]
    Launch(#[source] ClientError),

    /// A status fetch failed (network error, expired handle, bad payload)
    #[error("failed to fetch job status: {0}")]
    Fetch(#[source] ClientError),

    /// The job itself reported a failed terminal state
    #[error("discovery job failed: {0}")]
    JobFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_their_phase() {
        let launch = PollError::Launch(ClientError::JobAlreadyRunning);
        assert!(launch.to_string().contains("launch"));

        let fetch = PollError::Fetch(ClientError::api_error(502, "bad gateway"));
        assert!(fetch.to_string().contains("fetch"));

        let failed = PollError::JobFailed("quota exceeded".to_string());
        assert!(failed.to_string().contains("quota exceeded"));
    }
}
