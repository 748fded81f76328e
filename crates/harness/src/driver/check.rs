//! Response and status checks.
//!
//! Pure comparison functions shared by the driver and by callers that verify
//! observed data themselves. Each returns the structured failure from the
//! taxonomy in [`crate::common::error`]; nothing is retried or swallowed here.

use crate::common::BenchError;

/// Compares an observed response sequence against the expected one.
///
/// # Errors
///
/// Returns [`BenchError::LengthMismatch`] when the lengths differ, otherwise
/// [`BenchError::Mismatch`] at the first diverging word. Equal sequences
/// (including two empty ones) always pass.
pub fn check_response(observed: &[u64], expected: &[u64]) -> Result<(), BenchError> {
    if observed.len() != expected.len() {
        return Err(BenchError::LengthMismatch {
            observed: observed.len(),
            expected: expected.len(),
        });
    }
    for (index, (&obs, &exp)) in observed.iter().zip(expected).enumerate() {
        if obs != exp {
            return Err(BenchError::Mismatch {
                index,
                observed: obs,
                expected: exp,
            });
        }
    }
    Ok(())
}

/// Verifies a status/response code (e.g. an AXI `bresp`).
///
/// # Errors
///
/// Returns [`BenchError::StatusError`] carrying the reported code when it
/// differs from `expected`.
pub fn check_status(code: u64, expected: u64) -> Result<(), BenchError> {
    if code == expected {
        Ok(())
    } else {
        Err(BenchError::StatusError { code })
    }
}
