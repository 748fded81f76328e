//! Signal handles, clock edges, and the collaborator seam traits.
//!
//! This module defines how the driver talks to the outside world. It provides:
//! 1. **Handles:** `Signal`, an opaque reference to a named port of the device under test.
//! 2. **Edges:** `Edge`, the rising/falling synchronization points signal values latch on.
//! 3. **Seams:** The `SignalInterface` and `Clock` traits, the only two collaborators the
//!    driver depends on. Anything that drives a real or simulated design implements them.
//!
//! The driver never owns signals; it borrows an exclusive reference to one interface for
//! the duration of a transaction, which is what rules out two transactions racing on the
//! same handles.

use crate::common::BenchError;

/// Width-masked signal registry backing the in-process simulation.
pub mod store;

pub use store::SignalStore;

/// Opaque handle to a named port of the device under test.
///
/// Handles are issued by name lookup on a [`SignalInterface`] and are only
/// meaningful to the interface that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signal(pub(crate) usize);

/// A clock edge: the only synchronization points in the harness.
///
/// Signal drives committed before an edge wait are visible to the design
/// before the first sample taken after it (drive, settle, sample).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Low-to-high transition; values are latched and responses become visible.
    Rising,
    /// High-to-low transition; used for reset sequencing.
    Falling,
}

impl Edge {
    /// Returns the opposite edge.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Rising => Self::Falling,
            Self::Falling => Self::Rising,
        }
    }
}

/// Named signals that can be driven and sampled.
///
/// Implementors expose the ports of one device under test. Values are plain
/// integers; single-bit ports use `0`/`1` and "asserted" means non-zero.
pub trait SignalInterface {
    /// Resolves a port name to a handle.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::UnknownSignal`] if the design declares no port
    /// with this name. This is a fatal testbench configuration error.
    fn lookup(&self, name: &str) -> Result<Signal, BenchError>;

    /// Drives a signal to the given value.
    ///
    /// The new value becomes visible to the design at the next edge wait.
    fn set(&mut self, signal: Signal, value: u64);

    /// Samples the current value of a signal.
    fn get(&self, signal: Signal) -> u64;

    /// Returns `true` if the signal currently holds a non-zero value.
    fn is_asserted(&self, signal: Signal) -> bool {
        self.get(signal) != 0
    }
}

/// Periodic edge source; the harness's only suspension primitive.
///
/// A clock generator runs independently of the transaction driver and has no
/// data dependency on it beyond producing edges.
pub trait Clock {
    /// Suspends until the next edge of the given kind.
    fn wait_edge(&mut self, edge: Edge);

    /// Returns the number of rising edges that have elapsed.
    fn cycle(&self) -> u64;
}
