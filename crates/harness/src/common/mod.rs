//! Common types shared across the harness.
//!
//! This module collects definitions used by both the driver and the simulation layer:
//! 1. **Errors:** The structured failure taxonomy surfaced by every check.

/// Failure taxonomy definitions.
pub mod error;

pub use error::BenchError;
