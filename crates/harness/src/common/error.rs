//! Verification failure definitions.
//!
//! This module defines the failure taxonomy for the harness. It provides:
//! 1. **Check Failures:** Mismatched response words, length disagreements, and bad status codes.
//! 2. **Liveness Failures:** Handshake timeouts from the bounded polling loop.
//! 3. **Configuration Failures:** Lookups of signal names the device under test does not expose.
//!
//! Every failure is terminal for the current transaction; retry policy belongs to the
//! calling harness, which may re-issue the transaction with the same or adjusted stimulus.

use thiserror::Error;

/// A structured verification failure.
///
/// Each variant carries the offending index/value and, where one exists, the expected
/// value, so a failing test reports exactly which check diverged and by how much.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// A handshake signal set never asserted within the cycle bound.
    ///
    /// Raised by the bounded handshake poll. The associated value is the
    /// bound that elapsed, in rising edges.
    #[error("handshake not completed within {cycles} cycles")]
    Timeout {
        /// Number of rising edges waited before giving up.
        cycles: u32,
    },

    /// A sampled response word differs from the expected word.
    ///
    /// Raised at the first diverging element of an observed/expected pair
    /// of equal length.
    #[error("response mismatch at word {index}: observed {observed:#x}, expected {expected:#x}")]
    Mismatch {
        /// Zero-based index of the first diverging word.
        index: usize,
        /// The word sampled from the device under test.
        observed: u64,
        /// The word the transaction expected.
        expected: u64,
    },

    /// Observed and expected response sequences have different lengths.
    #[error("response length mismatch: observed {observed} words, expected {expected}")]
    LengthMismatch {
        /// Length of the observed sequence.
        observed: usize,
        /// Length of the expected sequence.
        expected: usize,
    },

    /// The device under test reported a non-expected status/response code.
    ///
    /// Raised by the write-response check (e.g. a non-zero AXI `bresp`).
    #[error("transfer completed with error status {code:#x}")]
    StatusError {
        /// The status code the device reported.
        code: u64,
    },

    /// No signal with the requested name exists on the device under test.
    ///
    /// This is a fatal configuration error: the testbench references a port
    /// the design does not declare.
    #[error("no signal named '{name}' on the device under test")]
    UnknownSignal {
        /// The name that failed to resolve.
        name: String,
    },
}
