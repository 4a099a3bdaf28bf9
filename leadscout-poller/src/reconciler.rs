//! Snapshot reconciliation
//!
//! Pure, synchronous core of the poller: compares the newest status
//! snapshot against the previous one and decides which event to emit and
//! whether polling continues. Fetch failures never reach this code — the
//! driver maps them straight to the error callback.

use leadscout_core::domain::event::{DiscoverySummary, PollEvent, ProgressUpdate};
use leadscout_core::domain::job::{JobState, StatusSnapshot};

/// Outcome of reconciling one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// The event this snapshot produces
    pub event: PollEvent,
    /// Whether the driver should keep polling after emitting the event
    pub continue_polling: bool,
    /// Whether the snapshot differs from the previous one.
    ///
    /// Advisory only — callers may use it to skip redundant UI updates.
    /// A terminal event is emitted whether or not the snapshot changed.
    pub changed: bool,
}

/// Reconcile the newest snapshot against the previous one
///
/// - Running → `Progress`, keep polling
/// - Completed → `Complete` with the accumulated summary, stop
/// - Failed → `Failed` with the backend's error message, stop
pub fn reconcile(previous: Option<&StatusSnapshot>, current: &StatusSnapshot) -> Reconciled {
    let changed = previous != Some(current);

    match current.state {
        JobState::Running => Reconciled {
            event: PollEvent::Progress(ProgressUpdate::from_snapshot(current)),
            continue_polling: true,
            changed,
        },
        JobState::Completed => Reconciled {
            event: PollEvent::Complete(DiscoverySummary::from_snapshot(current)),
            continue_polling: false,
            changed,
        },
        JobState::Failed => {
            let message = current
                .error
                .clone()
                .unwrap_or_else(|| "discovery job failed without an error message".to_string());
            Reconciled {
                event: PollEvent::Failed(message),
                continue_polling: false,
                changed,
            }
        }
    }
}
