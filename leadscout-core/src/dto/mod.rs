//! Data Transfer Objects for backend communication
//!
//! This module contains DTOs matching the discovery backend's wire format.
//! DTOs stay close to the JSON the backend emits; conversions into domain
//! types live next to them so parsing failures surface at the boundary.

pub mod job;
