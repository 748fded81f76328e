//! Bus transaction driver.
//!
//! This module implements the drive/poll/sample/compare loop at the heart of the
//! harness. It provides:
//! 1. **Reset:** Holding a reset line across falling edges to reach a known state.
//! 2. **Stimulus:** Driving request words one per rising edge with fixed control levels.
//! 3. **Handshake:** Polling a ready/valid signal set with a mandatory cycle bound.
//! 4. **Verdict:** Response and status verification feeding the per-transaction phase.
//!
//! One driver works for SPI-style shift buses and AXI-style valid/ready buses alike;
//! the protocols differ only in which signals and stimulus shapes are passed in.

use tracing::{debug, trace, warn};

use crate::common::BenchError;
use crate::signal::{Clock, Edge, Signal, SignalInterface};
use crate::stats::BenchStats;

/// Response and status comparison functions.
pub mod check;
/// Per-invocation expected/observed record.
pub mod transaction;

pub use check::{check_response, check_status};
pub use transaction::TransactionRecord;

/// Per-transaction state. `Verified` and `Failed` are terminal.
///
/// Every transition is caused by an explicit driver call; nothing moves the
/// phase implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No transaction in flight.
    Idle,
    /// Reset is asserted.
    Resetting,
    /// Stimulus words are being driven.
    Driving,
    /// Polling a ready/valid set.
    AwaitingHandshake,
    /// Response data is being read back.
    Sampling,
    /// The final check passed.
    Verified,
    /// A check failed or a handshake timed out.
    Failed,
}

/// Drives stimulus onto a signal interface and checks the response.
///
/// The driver borrows its bus exclusively for the duration of a transaction,
/// so two transactions can never race on the same signal handles. It holds no
/// state beyond the current phase and the run statistics.
pub struct BusDriver<'a, B> {
    bus: &'a mut B,
    phase: Phase,
    stats: BenchStats,
}

impl<'a, B: SignalInterface + Clock> BusDriver<'a, B> {
    /// Creates a driver over an exclusively borrowed bus.
    pub fn new(bus: &'a mut B) -> Self {
        Self {
            bus,
            phase: Phase::Idle,
            stats: BenchStats::new(),
        }
    }

    /// Current per-transaction phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &BenchStats {
        &self.stats
    }

    /// Puts the device into a known initial state.
    ///
    /// Asserts `reset`, waits `cycles` falling edges, then deasserts. The
    /// driver returns to `Idle` afterwards.
    pub fn reset(&mut self, reset: Signal, cycles: u32) {
        self.phase = Phase::Resetting;
        debug!(cycles, "asserting reset");
        self.bus.set(reset, 1);
        for _ in 0..cycles {
            self.bus.wait_edge(Edge::Falling);
        }
        self.bus.set(reset, 0);
        self.phase = Phase::Idle;
        self.stats.cycles = self.bus.cycle();
    }

    /// Drives a stimulus sequence and samples the response each cycle.
    ///
    /// Holds every `(signal, level)` pair in `controls` for the whole
    /// transaction (e.g. chip-select low), then for each word of `stimulus`:
    /// drive `request`, wait one rising edge, sample `response`. Suspends
    /// exactly `stimulus.len()` times; an empty stimulus returns an empty
    /// sequence after zero suspensions.
    ///
    /// Never fails by itself; comparing the returned sequence is the
    /// caller's responsibility (see [`check_response`]).
    pub fn run_transaction(
        &mut self,
        request: Signal,
        controls: &[(Signal, u64)],
        stimulus: &[u64],
        response: Signal,
    ) -> Vec<u64> {
        self.phase = Phase::Driving;
        for &(signal, level) in controls {
            self.bus.set(signal, level);
        }
        let mut observed = Vec::with_capacity(stimulus.len());
        for &word in stimulus {
            self.bus.set(request, word);
            self.stats.words_driven += 1;
            trace!("drove request word {word:#x}");
            self.bus.wait_edge(Edge::Rising);
            let sampled = self.bus.get(response);
            self.stats.words_sampled += 1;
            trace!("sampled response word {sampled:#x}");
            observed.push(sampled);
        }
        self.phase = Phase::Sampling;
        self.stats.cycles = self.bus.cycle();
        observed
    }

    /// Polls a ready/valid signal set, bounded by `timeout_cycles`.
    ///
    /// Succeeds as soon as every signal in `ready` is asserted (logical AND
    /// across the set). The set is checked once before the first suspension,
    /// so a handshake that is already complete costs zero cycles, and once
    /// after each rising edge thereafter.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Timeout`] if the set has not asserted after
    /// `timeout_cycles` rising edges. An unbounded poll would hang forever on
    /// a non-responding device, so there is no unbounded variant.
    pub fn wait_for_handshake(
        &mut self,
        ready: &[Signal],
        timeout_cycles: u32,
    ) -> Result<(), BenchError> {
        self.phase = Phase::AwaitingHandshake;
        if self.all_asserted(ready) {
            self.handshake_done(0);
            return Ok(());
        }
        for waited in 1..=timeout_cycles {
            self.bus.wait_edge(Edge::Rising);
            if self.all_asserted(ready) {
                self.handshake_done(waited);
                return Ok(());
            }
        }
        self.stats.timeouts += 1;
        self.stats.cycles = self.bus.cycle();
        self.phase = Phase::Failed;
        warn!(timeout_cycles, "handshake timed out");
        Err(BenchError::Timeout {
            cycles: timeout_cycles,
        })
    }

    /// Drives a single signal without waiting for an edge.
    ///
    /// Used to deassert a valid pulse after its address phase; the new level
    /// becomes visible to the device at the next suspension point.
    pub fn drive(&mut self, signal: Signal, value: u64) {
        self.bus.set(signal, value);
    }

    /// Samples a response signal at the current point in simulated time.
    pub fn sample(&mut self, signal: Signal) -> u64 {
        self.phase = Phase::Sampling;
        self.stats.words_sampled += 1;
        self.bus.get(signal)
    }

    /// Verifies an observed response sequence and records the verdict.
    ///
    /// # Errors
    ///
    /// Propagates the failure from [`check_response`].
    pub fn verify_response(
        &mut self,
        observed: &[u64],
        expected: &[u64],
    ) -> Result<(), BenchError> {
        let result = check_response(observed, expected);
        self.conclude(&result);
        result
    }

    /// Verifies a status code and records the verdict.
    ///
    /// # Errors
    ///
    /// Propagates the failure from [`check_status`].
    pub fn verify_status(&mut self, code: u64, expected: u64) -> Result<(), BenchError> {
        let result = check_status(code, expected);
        self.conclude(&result);
        result
    }

    fn all_asserted(&self, ready: &[Signal]) -> bool {
        ready.iter().all(|&signal| self.bus.is_asserted(signal))
    }

    fn handshake_done(&mut self, waited: u32) {
        self.stats.handshakes += 1;
        self.stats.cycles = self.bus.cycle();
        self.phase = Phase::Sampling;
        debug!(waited, "handshake completed");
    }

    fn conclude(&mut self, result: &Result<(), BenchError>) {
        match result {
            Ok(()) => {
                self.stats.verified += 1;
                self.phase = Phase::Verified;
                debug!("transaction verified");
            }
            Err(error) => {
                self.stats.failed += 1;
                self.phase = Phase::Failed;
                debug!(%error, "transaction failed");
            }
        }
    }
}

impl<B> std::fmt::Debug for BusDriver<'_, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusDriver")
            .field("phase", &self.phase)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
