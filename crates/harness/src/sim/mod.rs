//! In-process simulated collaborator: signal store plus clock.
//!
//! This module implements the environment the driver runs against in tests. It provides:
//! 1. **Signals:** Delegation of `set`/`get`/`lookup` to an owned [`SignalStore`].
//! 2. **Clock:** Alternating rising/falling edges with a configurable period and unit.
//! 3. **Evaluation:** The attached [`DutModel`] sees every edge, including edges the
//!    driver skipped over while waiting for the other kind.
//!
//! A `Simulation` owns its store exclusively, so one simulation means one active
//! transaction; concurrent transactions need disjoint simulations.

use std::fmt;

use crate::common::BenchError;
use crate::config::{ClockConfig, TimeUnit};
use crate::signal::{Clock, Edge, Signal, SignalInterface, SignalStore};

/// Device-under-test model trait and blanket closure impl.
pub mod model;

pub use model::DutModel;

/// One device under test: its signals, its behavior, and a clock.
pub struct Simulation<M> {
    signals: SignalStore,
    model: M,
    clock: ClockConfig,
    next_edge: Edge,
    half_ticks: u64,
    rising_edges: u64,
}

impl<M: DutModel> Simulation<M> {
    /// Creates a simulation with the default clock (10 ns period).
    pub fn new(signals: SignalStore, model: M) -> Self {
        Self::with_clock(signals, model, ClockConfig::default())
    }

    /// Creates a simulation with an explicit clock configuration.
    pub fn with_clock(signals: SignalStore, model: M, clock: ClockConfig) -> Self {
        Self {
            signals,
            model,
            clock,
            next_edge: Edge::Rising,
            half_ticks: 0,
            rising_edges: 0,
        }
    }

    /// Read access to the signal store, for test setup and inspection.
    pub fn signals(&self) -> &SignalStore {
        &self.signals
    }

    /// Mutable access to the signal store, for test setup.
    pub fn signals_mut(&mut self) -> &mut SignalStore {
        &mut self.signals
    }

    /// Simulated time elapsed, in clock units.
    pub fn now(&self) -> u64 {
        self.half_ticks * self.clock.period / 2
    }

    /// The unit [`Self::now`] is expressed in.
    pub fn time_unit(&self) -> TimeUnit {
        self.clock.unit
    }
}

impl<M: DutModel> SignalInterface for Simulation<M> {
    fn lookup(&self, name: &str) -> Result<Signal, BenchError> {
        self.signals.lookup(name)
    }

    fn set(&mut self, signal: Signal, value: u64) {
        self.signals.set(signal, value);
    }

    fn get(&self, signal: Signal) -> u64 {
        self.signals.get(signal)
    }
}

impl<M: DutModel> Clock for Simulation<M> {
    fn wait_edge(&mut self, edge: Edge) {
        // Edges strictly alternate; an un-awaited edge of the other kind is
        // still delivered to the model so edge-triggered behavior is not lost.
        loop {
            let current = self.next_edge;
            self.next_edge = current.opposite();
            self.half_ticks += 1;
            if current == Edge::Rising {
                self.rising_edges += 1;
            }
            self.model.on_edge(current, &mut self.signals);
            if current == edge {
                return;
            }
        }
    }

    fn cycle(&self) -> u64 {
        self.rising_edges
    }
}

impl<M> fmt::Debug for Simulation<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("signals", &self.signals.len())
            .field("clock", &self.clock)
            .field("cycle", &self.rising_edges)
            .finish_non_exhaustive()
    }
}
