//! Device-under-test model trait.
//!
//! A model stands in for the simulated design: it reads the driven inputs from the
//! signal store and updates the outputs it owns, once per clock edge. The harness
//! evaluates the model between the drive and the sample, which gives the standard
//! clocked-simulation ordering (drive, settle, sample).

use crate::signal::{Edge, SignalStore};

/// Behavior of the design under test, evaluated at every clock edge.
pub trait DutModel {
    /// Reacts to one clock edge.
    ///
    /// All signal drives committed before the edge wait are already visible in
    /// `signals`; any values written here are visible to the first sample taken
    /// after the wait returns.
    fn on_edge(&mut self, edge: Edge, signals: &mut SignalStore);
}

/// Closures are models; handy for one-off designs in tests.
impl<F> DutModel for F
where
    F: FnMut(Edge, &mut SignalStore),
{
    fn on_edge(&mut self, edge: Edge, signals: &mut SignalStore) {
        self(edge, signals);
    }
}
