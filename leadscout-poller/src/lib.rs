//! Leadscout Poller
//!
//! Tracks a long-running discovery job by polling the backend for status
//! snapshots until the job reaches a terminal state.
//!
//! Architecture:
//! - Source traits: seams for launching a job and fetching its status
//! - Reconciler: pure function turning a snapshot into a poll event
//! - Driver: owns the timer and the cancellation flag for one session
//!
//! Each polling session is fully independent — one task, one timer, one
//! cancellation flag — and guarantees at most one terminal callback no
//! matter how the session ends (completion, failure, or cancellation).

pub mod config;
pub mod driver;
pub mod error;
pub mod reconciler;
pub mod source;

pub use config::PollConfig;
pub use driver::{Canceller, PollDriver, PollHandle, PollObserver, StopReason};
pub use error::PollError;
pub use reconciler::{Reconciled, reconcile};
pub use source::{JobLauncher, StatusFetcher};
