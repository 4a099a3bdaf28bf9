//! Discovery job domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque handle to a running discovery job.
///
/// Issued by the backend when a job is launched and consumed by every
/// subsequent status fetch. The poll driver owns the handle for the
/// lifetime of one polling session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discovery job state as reported by the backend.
///
/// `Completed` and `Failed` are terminal: once reached, no further
/// transitions happen and no further polling occurs for that job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    Running,
    Completed,
    Failed,
}

impl JobState {
    /// Whether this state ends the polling session
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// One status snapshot of a discovery job
///
/// Produced by a single status fetch. Snapshots are compared with
/// `PartialEq` so callers can skip redundant updates; that comparison is
/// advisory only and never affects terminal-state handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub state: JobState,
    /// Free-form label for the current discovery phase
    /// (e.g., "scanning subreddits", "scoring posts")
    pub phase: Option<String>,
    pub current: u64,
    pub total: u64,
    pub message: Option<String>,
    /// Number of leads created so far
    pub leads_created: u64,
    /// Identifiers of leads produced so far
    pub lead_ids: Vec<Uuid>,
    /// Present only when the job failed
    pub error: Option<String>,
    /// Human-readable wrap-up, present once the job completed
    pub summary: Option<String>,
}

impl StatusSnapshot {
    /// Whether this snapshot reports a terminal state
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}
