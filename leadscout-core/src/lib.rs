//! Leadscout Core
//!
//! Core types and abstractions for the Leadscout discovery tooling.
//!
//! This crate contains:
//! - Domain types: Core business entities (StatusSnapshot, poll events, etc.)
//! - DTOs: Data transfer objects matching the discovery backend's wire format

pub mod domain;
pub mod dto;
