//! Trait seams between the driver and the backend
//!
//! The driver is generic over these two traits so the state machine can be
//! exercised against scripted sources in tests. `DiscoveryClient` is the
//! production implementation of both.

use async_trait::async_trait;
use leadscout_client::{ClientError, DiscoveryClient, StatusSnapshot, TaskId};
use uuid::Uuid;

/// Starts a discovery job and hands back its opaque task handle
#[async_trait]
pub trait JobLauncher: Send + Sync {
    /// Launch a job for the campaign. One call, no local state retained.
    async fn launch(&self, campaign_id: Uuid, force: bool) -> Result<TaskId, ClientError>;
}

/// Reads one status snapshot for a running job
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    /// Fetch the current status. Pure read, no retry — the driver decides
    /// what a failure means.
    async fn fetch(&self, task_id: &TaskId) -> Result<StatusSnapshot, ClientError>;
}

#[async_trait]
impl JobLauncher for DiscoveryClient {
    async fn launch(&self, campaign_id: Uuid, force: bool) -> Result<TaskId, ClientError> {
        self.launch_discovery(campaign_id, force).await
    }
}

#[async_trait]
impl StatusFetcher for DiscoveryClient {
    async fn fetch(&self, task_id: &TaskId) -> Result<StatusSnapshot, ClientError> {
        self.fetch_status(task_id).await
    }
}
