//! Discovery job endpoints

use crate::DiscoveryClient;
use crate::error::{ClientError, Result};
use leadscout_core::domain::job::{StatusSnapshot, TaskId};
use leadscout_core::dto::job::{JobStatusResponse, LaunchDiscovery, LaunchResponse};
use tracing::debug;
use uuid::Uuid;

impl DiscoveryClient {
    /// Launch a discovery job for a campaign
    ///
    /// One network call, no local state. If the backend reports that a job
    /// for this campaign is already in flight and `force` was not set, this
    /// surfaces [`ClientError::JobAlreadyRunning`] instead of a task id, so
    /// no polling session ever starts for the rejected launch.
    ///
    /// # Arguments
    /// * `campaign_id` - The campaign to discover leads for
    /// * `force` - Clear a stuck prior job before launching
    ///
    /// # Returns
    /// The opaque task id to poll
    pub async fn launch_discovery(&self, campaign_id: Uuid, force: bool) -> Result<TaskId> {
        let url = format!("{}/api/jobs", self.base_url);
        let request = LaunchDiscovery { campaign_id, force };

        debug!(%campaign_id, force, "launching discovery job");

        let response = self.client.post(&url).json(&request).send().await?;
        let launched: LaunchResponse = self.handle_response(response).await?;

        if launched.already_running && !force {
            return Err(ClientError::JobAlreadyRunning);
        }

        Ok(TaskId::new(launched.task_id))
    }

    /// Fetch the current status of a discovery job
    ///
    /// Pure read; never mutates server state and never retries. Fails with
    /// a [`ClientError`] on network failure or an invalid handle (e.g., the
    /// job expired server-side).
    ///
    /// # Arguments
    /// * `task_id` - The task handle returned by [`Self::launch_discovery`]
    ///
    /// # Returns
    /// A status snapshot in domain form
    pub async fn fetch_status(&self, task_id: &TaskId) -> Result<StatusSnapshot> {
        let url = format!("{}/api/jobs/{}/status", self.base_url, task_id);
        let response = self.client.get(&url).send().await?;

        let status: JobStatusResponse = self.handle_response(response).await?;
        let snapshot = StatusSnapshot::try_from(status)?;

        debug!(%task_id, state = ?snapshot.state, current = snapshot.current, "fetched job status");

        Ok(snapshot)
    }
}
