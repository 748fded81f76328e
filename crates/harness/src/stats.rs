//! Per-run statistics collection.
//!
//! This module tracks what a verification run actually did. It provides:
//! 1. **Throughput:** Words driven and sampled, handshakes completed.
//! 2. **Time:** Clock cycles consumed and wall-clock elapsed.
//! 3. **Verdicts:** Transactions verified, failed, and timed out.

use std::time::{Duration, Instant};

/// Counters for one verification run.
///
/// Updated by the driver as it works; read by the caller when reporting.
#[derive(Debug, Clone)]
pub struct BenchStats {
    start_time: Instant,
    /// Rising edges elapsed on the driver's clock.
    pub cycles: u64,
    /// Stimulus words driven onto request signals.
    pub words_driven: u64,
    /// Response words sampled.
    pub words_sampled: u64,
    /// Handshakes that completed within their bound.
    pub handshakes: u64,
    /// Handshakes that hit their cycle bound.
    pub timeouts: u64,
    /// Transactions whose final check passed.
    pub verified: u64,
    /// Transactions whose final check failed.
    pub failed: u64,
}

impl BenchStats {
    /// Creates a zeroed statistics block stamped with the current time.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            words_driven: 0,
            words_sampled: 0,
            handshakes: 0,
            timeouts: 0,
            verified: 0,
            failed: 0,
        }
    }

    /// Wall-clock time since this block was created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for BenchStats {
    fn default() -> Self {
        Self::new()
    }
}
