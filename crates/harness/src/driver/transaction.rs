//! Per-invocation transaction record.
//!
//! A `TransactionRecord` holds the expected stimulus, the expected response, and the
//! response words accumulated while the transaction executes. It is created per test
//! invocation, mutated only by the driver, and discarded after the verdict.

use crate::common::BenchError;
use crate::driver::check::check_response;

/// Expected and observed data for one transaction.
///
/// Invariant: `observed().len()` never exceeds `expected_input.len()`; the
/// driver takes exactly one sample per drive cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Stimulus words the driver will send, in order.
    pub expected_input: Vec<u64>,
    /// Response words the device should produce, in order.
    pub expected_output: Vec<u64>,
    observed_output: Vec<u64>,
}

impl TransactionRecord {
    /// Creates a record with distinct stimulus and expected response.
    pub fn new(expected_input: Vec<u64>, expected_output: Vec<u64>) -> Self {
        let capacity = expected_input.len();
        Self {
            expected_input,
            expected_output,
            observed_output: Vec::with_capacity(capacity),
        }
    }

    /// Creates a record for an echoing device: the expected response is the stimulus.
    pub fn loopback(words: Vec<u64>) -> Self {
        Self::new(words.clone(), words)
    }

    /// Appends one sampled response word.
    pub fn observe(&mut self, word: u64) {
        debug_assert!(
            self.observed_output.len() < self.expected_input.len(),
            "more samples than drive cycles"
        );
        self.observed_output.push(word);
    }

    /// Appends a batch of sampled response words.
    pub fn observe_all(&mut self, words: impl IntoIterator<Item = u64>) {
        for word in words {
            self.observe(word);
        }
    }

    /// The response words sampled so far.
    pub fn observed(&self) -> &[u64] {
        &self.observed_output
    }

    /// Compares the observed response against the expected one.
    ///
    /// # Errors
    ///
    /// Propagates the failure from [`check_response`]: a length disagreement
    /// or the first diverging word.
    pub fn verify(&self) -> Result<(), BenchError> {
        check_response(&self.observed_output, &self.expected_output)
    }
}
