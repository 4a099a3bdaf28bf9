//! Poll events emitted while tracking a discovery job
//!
//! The reconciler turns each status snapshot into exactly one of these
//! events. `Progress` repeats while the job runs; `Complete` and `Failed`
//! fire at most once per polling session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::job::StatusSnapshot;

/// Progress update for a still-running job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub phase: Option<String>,
    pub current: u64,
    pub total: u64,
    pub message: Option<String>,
    pub leads_created: u64,
}

impl ProgressUpdate {
    pub fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        Self {
            phase: snapshot.phase.clone(),
            current: snapshot.current,
            total: snapshot.total,
            message: snapshot.message.clone(),
            leads_created: snapshot.leads_created,
        }
    }
}

/// Accumulated result of a completed discovery job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverySummary {
    pub leads_created: u64,
    pub lead_ids: Vec<Uuid>,
    pub summary: Option<String>,
}

impl DiscoverySummary {
    pub fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        Self {
            leads_created: snapshot.leads_created,
            lead_ids: snapshot.lead_ids.clone(),
            summary: snapshot.summary.clone(),
        }
    }
}

/// Event derived from one status snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    Progress(ProgressUpdate),
    Complete(DiscoverySummary),
    /// The job itself reported failure; carries the backend's error message
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::JobState;

    fn snapshot() -> StatusSnapshot {
        StatusSnapshot {
            state: JobState::Completed,
            phase: Some("done".to_string()),
            current: 10,
            total: 10,
            message: Some("all subreddits scanned".to_string()),
            leads_created: 4,
            lead_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
            error: None,
            summary: Some("4 leads across 2 subreddits".to_string()),
        }
    }

    #[test]
    fn test_progress_from_snapshot() {
        let snap = snapshot();
        let update = ProgressUpdate::from_snapshot(&snap);
        assert_eq!(update.current, 10);
        assert_eq!(update.total, 10);
        assert_eq!(update.leads_created, 4);
        assert_eq!(update.phase.as_deref(), Some("done"));
    }

    #[test]
    fn test_summary_from_snapshot() {
        let snap = snapshot();
        let summary = DiscoverySummary::from_snapshot(&snap);
        assert_eq!(summary.leads_created, 4);
        assert_eq!(summary.lead_ids, snap.lead_ids);
        assert_eq!(
            summary.summary.as_deref(),
            Some("4 leads across 2 subreddits")
        );
    }
}
