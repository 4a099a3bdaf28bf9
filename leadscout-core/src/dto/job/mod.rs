//! Discovery job DTOs for backend communication

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::job::{JobState, StatusSnapshot};

/// Request to launch a discovery job for a campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchDiscovery {
    pub campaign_id: Uuid,
    /// Clear a stuck prior job before launching
    #[serde(default)]
    pub force: bool,
}

/// Backend response to a launch request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchResponse {
    pub task_id: String,
    /// Set when another job for the same campaign is already in flight
    #[serde(default)]
    pub already_running: bool,
}

/// Raw status payload from `GET /api/jobs/{task_id}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    /// "running", "completed", or "failed"
    pub status: String,
    pub phase: Option<String>,
    #[serde(default)]
    pub current: u64,
    #[serde(default)]
    pub total: u64,
    pub message: Option<String>,
    #[serde(default)]
    pub leads_created: u64,
    #[serde(default)]
    pub leads: Vec<Uuid>,
    pub error: Option<String>,
    pub summary: Option<String>,
}

/// The backend reported a status string we don't recognize
#[derive(Debug, Clone, Error)]
#[error("unknown job state: {0:?}")]
pub struct UnknownJobState(pub String);

impl TryFrom<JobStatusResponse> for StatusSnapshot {
    type Error = UnknownJobState;

    fn try_from(response: JobStatusResponse) -> Result<Self, Self::Error> {
        let state = match response.status.as_str() {
            "running" => JobState::Running,
            "completed" => JobState::Completed,
            "failed" => JobState::Failed,
            other => return Err(UnknownJobState(other.to_string())),
        };

        Ok(Self {
            state,
            phase: response.phase,
            current: response.current,
            total: response.total,
            message: response.message,
            leads_created: response.leads_created,
            lead_ids: response.leads,
            error: response.error,
            summary: response.summary,
        })
    }
}
