//! Poll driver
//!
//! Owns the repeating timer and the cancellation token for one polling
//! session. The driver launches the job, fetches a snapshot per tick,
//! feeds it to the reconciler, and invokes the observer's callbacks.
//!
//! Session state machine:
//! - Idle → (launch succeeds) → Polling
//! - Polling → (fetch error) → Stopped with [`StopReason::Error`]
//! - Polling → (job completed) → Stopped with [`StopReason::Complete`]
//! - Polling → (job failed) → Stopped with [`StopReason::Error`]
//! - any → (cancel) → Stopped with [`StopReason::Cancelled`]
//!
//! Cancellation is cooperative: setting the token is immediate, but a
//! fetch already in flight may still complete. Its result is checked
//! against the token before any callback fires, so a session never
//! delivers a callback after `cancel()` returned, and never delivers more
//! than one terminal callback.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use leadscout_core::domain::event::{DiscoverySummary, PollEvent, ProgressUpdate};
use leadscout_core::domain::job::StatusSnapshot;

use crate::config::PollConfig;
use crate::error::PollError;
use crate::reconciler::reconcile;
use crate::source::{JobLauncher, StatusFetcher};

/// Receives the events of one polling session
///
/// Callbacks are synchronous and run on the session task. A session
/// invokes `on_complete` or `on_error` at most once, and never invokes
/// anything after cancellation was observed.
pub trait PollObserver: Send + Sync + 'static {
    /// A still-running snapshot was reconciled.
    ///
    /// `changed` is false when the snapshot is identical to the previous
    /// one; observers driving a UI can use it to skip redundant updates.
    fn on_progress(&self, update: &ProgressUpdate, changed: bool);

    /// The job reached its completed state.
    fn on_complete(&self, summary: &DiscoverySummary);

    /// The session ended in error: launch rejected, fetch failed, or the
    /// job itself reported failure.
    fn on_error(&self, error: &PollError);
}

/// How a polling session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The job reached its completed state
    Complete,
    /// Launch rejection, fetch failure, or job failure
    Error,
    /// The session was cancelled before a terminal snapshot arrived
    Cancelled,
}

/// Drives polling sessions against a launcher/fetcher source
///
/// One driver may start many sessions; each session gets its own task,
/// timer, and cancellation token, and sessions never share mutable state.
pub struct PollDriver<S> {
    source: Arc<S>,
    config: PollConfig,
}

impl<S> PollDriver<S>
where
    S: JobLauncher + StatusFetcher + 'static,
{
    /// Creates a new poll driver
    pub fn new(source: Arc<S>, config: PollConfig) -> Self {
        Self { source, config }
    }

    /// Starts a polling session for a campaign
    ///
    /// Launches the job, then fetches one status snapshot per interval
    /// tick until a terminal snapshot arrives, a fetch fails, or the
    /// session is cancelled. If the launch itself is rejected, `on_error`
    /// fires and the timer never starts.
    ///
    /// # Arguments
    /// * `campaign_id` - The campaign to discover leads for
    /// * `force` - Clear a stuck prior job before launching
    /// * `observer` - Receives progress/complete/error callbacks
    ///
    /// # Returns
    /// A handle that can cancel the session or await its end
    pub fn start(
        &self,
        campaign_id: Uuid,
        force: bool,
        observer: Arc<dyn PollObserver>,
    ) -> PollHandle {
        let token = CancellationToken::new();
        let session = Session {
            source: Arc::clone(&self.source),
            interval: self.config.interval,
            campaign_id,
            force,
            observer,
            token: token.clone(),
        };

        let task = tokio::spawn(session.run());

        PollHandle { token, task }
    }
}

/// Handle to a running polling session
pub struct PollHandle {
    token: CancellationToken,
    task: JoinHandle<StopReason>,
}

impl PollHandle {
    /// Cancel the session
    ///
    /// Idempotent: calling it repeatedly, or after the session already
    /// ended, is a no-op. Once set, no further callbacks fire — a fetch
    /// already in flight has its result dropped.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// A clonable cancel handle, usable from another task (e.g., a signal
    /// handler) while someone else awaits [`Self::join`].
    pub fn canceller(&self) -> Canceller {
        Canceller {
            token: self.token.clone(),
        }
    }

    /// Whether the session task has finished
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the session to end and report how it ended
    pub async fn join(self) -> StopReason {
        match self.task.await {
            Ok(reason) => reason,
            Err(e) => {
                error!("polling session task failed: {}", e);
                StopReason::Error
            }
        }
    }
}

/// Clonable cancellation handle for one session
#[derive(Clone)]
pub struct Canceller {
    token: CancellationToken,
}

impl Canceller {
    /// Cancel the session. Same semantics as [`PollHandle::cancel`].
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

/// One polling session: launch, tick, fetch, reconcile, emit.
struct Session<S> {
    source: Arc<S>,
    interval: std::time::Duration,
    campaign_id: Uuid,
    force: bool,
    observer: Arc<dyn PollObserver>,
    token: CancellationToken,
}

impl<S> Session<S>
where
    S: JobLauncher + StatusFetcher,
{
    async fn run(self) -> StopReason {
        if self.token.is_cancelled() {
            return StopReason::Cancelled;
        }

        let launch = tokio::select! {
            _ = self.token.cancelled() => return StopReason::Cancelled,
            result = self.source.launch(self.campaign_id, self.force) => result,
        };

        let task_id = match launch {
            Ok(id) => id,
            Err(e) => {
                if self.token.is_cancelled() {
                    return StopReason::Cancelled;
                }
                warn!(campaign_id = %self.campaign_id, "discovery launch rejected: {}", e);
                self.observer.on_error(&PollError::Launch(e));
                return StopReason::Error;
            }
        };

        if self.token.is_cancelled() {
            debug!(%task_id, "session cancelled before first tick");
            return StopReason::Cancelled;
        }

        info!(%task_id, campaign_id = %self.campaign_id, "discovery job launched, polling");

        let mut interval = time::interval(self.interval);
        // One in-flight fetch at a time; a slow fetch skips ticks rather
        // than queueing them.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut previous: Option<StatusSnapshot> = None;

        loop {
            tokio::select! {
                _ = self.token.cancelled() => {
                    debug!(%task_id, "session cancelled, stopping poll loop");
                    return StopReason::Cancelled;
                }
                _ = interval.tick() => {}
            }

            let fetched = tokio::select! {
                _ = self.token.cancelled() => {
                    debug!(%task_id, "session cancelled while fetch was in flight");
                    return StopReason::Cancelled;
                }
                result = self.source.fetch(&task_id) => result,
            };

            let snapshot = match fetched {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    if self.token.is_cancelled() {
                        return StopReason::Cancelled;
                    }
                    warn!(%task_id, "status fetch failed, halting session: {}", e);
                    self.observer.on_error(&PollError::Fetch(e));
                    return StopReason::Error;
                }
            };

            // A cancel that raced the in-flight fetch wins: drop the response.
            if self.token.is_cancelled() {
                debug!(%task_id, "dropping snapshot fetched after cancellation");
                return StopReason::Cancelled;
            }

            let outcome = reconcile(previous.as_ref(), &snapshot);

            match outcome.event {
                PollEvent::Progress(update) => {
                    self.observer.on_progress(&update, outcome.changed);
                    previous = Some(snapshot);
                }
                PollEvent::Complete(summary) => {
                    info!(%task_id, leads = summary.leads_created, "discovery job completed");
                    self.observer.on_complete(&summary);
                    return StopReason::Complete;
                }
                PollEvent::Failed(message) => {
                    warn!(%task_id, "discovery job failed: {}", message);
                    self.observer.on_error(&PollError::JobFailed(message));
                    return StopReason::Error;
                }
            }
        }
    }
}
