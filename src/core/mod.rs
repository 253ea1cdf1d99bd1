//! Core components shared by every pipeline stage.
//!
//! This module contains:
//! - The main [`PulseClient`] and its builder.
//! - The primary [`PulseError`] type.
//! - Shared data models ([`PostRecord`], [`HeadlineRow`]).
//! - Internal networking helpers.

/// The main client (`PulseClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`PulseError`) for the crate.
pub mod error;
/// Shared data models used across the pipeline stages.
pub mod models;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::PulseClient`
pub use client::{PulseClient, PulseClientBuilder};
pub use error::PulseError;
pub use models::{HeadlineRow, PostRecord};
