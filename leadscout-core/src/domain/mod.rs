//! Core domain types
//!
//! This module contains the domain structures shared between the client,
//! the poller, and the CLI. These types represent discovery jobs as the
//! frontend sees them, independent of the backend's wire format.

pub mod event;
pub mod job;
